use alert_timeline::{cli, config, error, logging, prompt, render};
use alert_timeline::{HttpApi, TimelineSession};
use alert_timeline_common::{CameraId, ReportForm, Translator};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TimelineError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    let t = Translator::new(cli.locale.unwrap_or(config.locale));

    match cli.command {
        Commands::Alerts { filter, json } => {
            let mut session = open_session(&config, cli.api_url.as_deref()).await?;
            session.set_filter(filter);

            let sorted = session.state().view.sorted_alerts();
            if json {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                print!("{}", render::alerts_panel(&t, &sorted));
                println!("{}件", sorted.len());
            }
        }

        Commands::Cams => {
            let session = open_session(&config, cli.api_url.as_deref()).await?;
            let view = &session.state().view;
            println!("{}", render::camera_bar(&view.unique_cams(), view.selected_cam()));
        }

        Commands::Archive { cam, filter, json } => {
            let mut session = open_session(&config, cli.api_url.as_deref()).await?;
            session.set_filter(filter);
            if let Some(cam) = cam {
                session.select_cam(&CameraId::new(cam))?;
            }

            let view = &session.state().view;
            let records = view.archive_records();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", t.t("archiveTitle"));
                println!("{}", render::camera_bar(&view.unique_cams(), view.selected_cam()));
                print!("{}", render::archive_list(&t, &records));
            }
        }

        Commands::Report {
            index,
            cam,
            filter,
            worker,
            worker_id,
            department,
            supervisor,
            timestamp,
            now,
        } => {
            let mut session = open_session(&config, cli.api_url.as_deref()).await?;
            session.set_filter(filter);
            if let Some(cam) = cam {
                session.select_cam(&CameraId::new(cam))?;
            }

            let record = session
                .state()
                .view
                .archive_records()
                .get(index)
                .map(|r| (*r).clone())
                .ok_or_else(|| TimelineError::RecordNotFound(format!("#{}", index)))?;

            println!(
                "📝 {} {} ({})",
                record.camera_id.label(),
                record.alert_type,
                alert_timeline_common::format_time(&record.timestamp)
            );

            let timestamp = if now {
                Some(chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string())
            } else {
                timestamp
            };
            let args = prompt::ReportArgs {
                worker,
                worker_id,
                department,
                supervisor,
                timestamp,
            };
            let missing = args.missing_fields();
            if !missing.is_empty() {
                println!("未入力の項目: {}", missing.join(", "));
            }
            let form = args.into_form(ReportForm::for_record(&record))?;

            session.open_record(record);
            session.submit_report(&form)?;
            if let Some(message) = session.wait_report().await {
                println!("{}", message);
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  API URL: {}", config.api_url(cli.api_url.as_deref()));
                println!("  言語: {:?}", t.locale());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

async fn open_session(config: &Config, api_url: Option<&str>) -> Result<TimelineSession<HttpApi>> {
    let api = HttpApi::from_config(config, api_url)?;
    let mut session = TimelineSession::new(api);
    session.start();
    session.wait_loaded().await;
    if let Some(reason) = session.fetch_error() {
        eprintln!("アラートを取得できませんでした: {}", reason);
    }
    Ok(session)
}
