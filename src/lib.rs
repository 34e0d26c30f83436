//! Alert Timeline
//!
//! アラートフィードの取得、カメラ別アーカイブ、報告送信を行うクライアント

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;

pub use api::{HttpApi, TimelineApi};
pub use error::{Result, TimelineError};
pub use session::{SessionEvent, TimelineSession};
