//! 派生ビュー
//!
//! 生のアラート一覧から画面表示用のデータを導出する:
//! - サイドパネル用の並べ替え済み一覧
//! - カメラ一覧（初出順・重複なし）
//! - 選択中カメラのアーカイブ

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::format::parse_timestamp;
use crate::types::{Alert, CameraId, SortOrder};

/// 並べ替え後のインデックス列を返す（安定ソート）
///
/// 日時を解釈できないアラートは最も古いものとして扱う
pub fn sort_indices(alerts: &[Alert], order: SortOrder) -> Vec<usize> {
    let keys: Vec<Option<DateTime<Utc>>> = alerts
        .iter()
        .map(|a| parse_timestamp(&a.timestamp))
        .collect();

    let mut indices: Vec<usize> = (0..alerts.len()).collect();
    indices.sort_by(|&a, &b| match order {
        SortOrder::MostRecent => keys[b].cmp(&keys[a]),
        SortOrder::Oldest => keys[a].cmp(&keys[b]),
    });
    indices
}

/// 日時順に並べ替えたアラート
pub fn sorted_alerts(alerts: &[Alert], order: SortOrder) -> Vec<&Alert> {
    sort_indices(alerts, order)
        .into_iter()
        .map(|i| &alerts[i])
        .collect()
}

/// カメラ識別子を初出順・重複なしで収集
pub fn unique_cams(alerts: &[Alert]) -> Vec<CameraId> {
    let mut seen = HashSet::new();
    alerts
        .iter()
        .filter(|a| seen.insert(&a.camera_id))
        .map(|a| a.camera_id.clone())
        .collect()
}

/// 並べ替え済み一覧から指定カメラの分だけ抽出
pub fn archive_records<'a>(sorted: &[&'a Alert], cam: &CameraId) -> Vec<&'a Alert> {
    sorted
        .iter()
        .copied()
        .filter(|a| &a.camera_id == cam)
        .collect()
}

/// タイムライン画面のビュー状態
///
/// 並べ替えは (アラート一覧, 並び順) が変わった時だけ再計算する
#[derive(Debug, Clone, Default)]
pub struct TimelineView {
    alerts: Vec<Alert>,
    filter: SortOrder,
    selected_cam: Option<CameraId>,
    sorted: Vec<usize>,
    sort_runs: u64,
}

impl TimelineView {
    pub fn new() -> Self {
        Self::default()
    }

    /// アラート一覧を差し替える
    ///
    /// カメラ選択はレスポンス先頭（並べ替え前）のカメラになる
    pub fn load_alerts(&mut self, alerts: Vec<Alert>) {
        self.selected_cam = alerts.first().map(|a| a.camera_id.clone());
        self.alerts = alerts;
        self.resort();
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn filter(&self) -> SortOrder {
        self.filter
    }

    /// 並び順を変更。変化があった場合だけ再計算して `true`
    pub fn set_filter(&mut self, filter: SortOrder) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.resort();
        true
    }

    pub fn selected_cam(&self) -> Option<&CameraId> {
        self.selected_cam.as_ref()
    }

    /// カメラを選択
    ///
    /// # Returns
    /// * `Err(Error::UnknownCamera)` - 読み込み済みアラートに存在しないカメラ
    pub fn select_cam(&mut self, cam: &CameraId) -> Result<()> {
        if !self.alerts.iter().any(|a| &a.camera_id == cam) {
            return Err(Error::UnknownCamera(cam.to_string()));
        }
        self.selected_cam = Some(cam.clone());
        Ok(())
    }

    pub fn sorted_alerts(&self) -> Vec<&Alert> {
        self.sorted.iter().map(|&i| &self.alerts[i]).collect()
    }

    pub fn unique_cams(&self) -> Vec<CameraId> {
        unique_cams(&self.alerts)
    }

    pub fn archive_records(&self) -> Vec<&Alert> {
        match &self.selected_cam {
            Some(cam) => archive_records(&self.sorted_alerts(), cam),
            None => Vec::new(),
        }
    }

    /// 並べ替えの実行回数
    pub fn sort_runs(&self) -> u64 {
        self.sort_runs
    }

    fn resort(&mut self) {
        self.sorted = sort_indices(&self.alerts, self.filter);
        self.sort_runs += 1;
    }
}
