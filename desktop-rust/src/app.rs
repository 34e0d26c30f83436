use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use alert_timeline::config::Config;
use alert_timeline::{HttpApi, TimelineSession};
use alert_timeline_common::{
    Alert, CameraId, SortOrder, Translator, format_time, icon_for,
};
use anyhow::Result;
use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use crate::io::{fetch_thumbnail, resolve_image_url};
use crate::model::{ReportDraft, ThumbData};

const CARD_THUMB: egui::Vec2 = egui::vec2(240.0, 160.0);

pub struct DesktopApp {
    session: TimelineSession<HttpApi>,
    runtime: tokio::runtime::Runtime,
    t: Translator,
    base_url: String,
    refresh_key: u64,
    draft: ReportDraft,
    thumbs: HashMap<String, egui::TextureHandle>,
    thumb_rx: Receiver<ThumbData>,
    thumb_tx: mpsc::Sender<ThumbData>,
    thumb_inflight: HashSet<String>,
    thumb_failed: HashSet<String>,
    pending_thumbs: Vec<ThumbData>,
}

impl DesktopApp {
    pub fn new() -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let api = HttpApi::from_config(&config, None)?;
        let base_url = api.base_url().to_string();

        let mut session = TimelineSession::with_runtime(api, runtime.handle().clone());
        session.start();
        session.set_refresh_key(0);

        let (thumb_tx, thumb_rx) = mpsc::channel();
        Ok(Self {
            session,
            runtime,
            t: Translator::new(config.locale),
            base_url,
            refresh_key: 0,
            draft: ReportDraft::default(),
            thumbs: HashMap::new(),
            thumb_rx,
            thumb_tx,
            thumb_inflight: HashSet::new(),
            thumb_failed: HashSet::new(),
            pending_thumbs: Vec::new(),
        })
    }

    fn open_record(&mut self, record: Alert) {
        self.draft = ReportDraft::for_record(&record);
        self.session.open_record(record);
    }

    fn submit_report(&mut self) {
        match self.session.submit_report(&self.draft.form) {
            Ok(()) => self.draft.error = None,
            Err(err) => self.draft.error = Some(err.to_string()),
        }
    }

    fn request_thumbnail(&mut self, url: &str) {
        if url.is_empty()
            || self.thumbs.contains_key(url)
            || self.thumb_inflight.contains(url)
            || self.thumb_failed.contains(url)
        {
            return;
        }
        self.thumb_inflight.insert(url.to_string());
        let sender = self.thumb_tx.clone();
        let url_owned = url.to_string();

        std::thread::spawn(move || {
            let thumb = fetch_thumbnail(&url_owned).unwrap_or_else(|err| {
                tracing::warn!("thumbnail failed: {err:#}");
                ThumbData {
                    url: url_owned,
                    size: [0, 0],
                    pixels: Vec::new(),
                }
            });
            let _ = sender.send(thumb);
        });
    }

    fn process_pending_thumbs(&mut self, ctx: &egui::Context) {
        let pending = std::mem::take(&mut self.pending_thumbs);
        for msg in pending {
            if msg.size[0] == 0 || msg.size[1] == 0 {
                self.thumb_failed.insert(msg.url);
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(msg.size, &msg.pixels);
            let texture = ctx.load_texture(&msg.url, color_image, egui::TextureOptions::default());
            self.thumbs.insert(msg.url, texture);
        }
    }

    fn poll_messages(&mut self) {
        while let Ok(msg) = self.thumb_rx.try_recv() {
            self.thumb_inflight.remove(&msg.url);
            self.pending_thumbs.push(msg);
        }

        self.session.pump();
    }

    fn render_alert_item(&self, ui: &mut egui::Ui, alert: &Alert) {
        let icon = icon_for(&alert.alert_type);
        egui::Frame::none()
            .fill(Color32::from_rgb(24, 28, 40))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(alert.camera_id.label())
                                .strong()
                                .color(Color32::from_rgb(90, 160, 255)),
                        );
                        ui.label(
                            RichText::new(format_time(&alert.timestamp))
                                .size(11.0)
                                .color(Color32::from_gray(150)),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let [r, g, b] = icon.color;
                        ui.label(RichText::new(icon.glyph).size(20.0).color(Color32::from_rgb(r, g, b)))
                            .on_hover_text(alert.alert_type.as_str());
                    });
                });
            });
    }

    fn render_record_card(&mut self, ui: &mut egui::Ui, index: usize, record: &Alert) -> bool {
        let frame = egui::Frame::none()
            .fill(Color32::from_rgb(31, 35, 48))
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(40)))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(12.0));

        let url = resolve_image_url(&self.base_url, &record.img_url);
        let inner = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                if let Some(texture) = self.thumbs.get(&url) {
                    ui.add(egui::Image::new(texture).fit_to_exact_size(CARD_THUMB).rounding(8.0));
                } else {
                    let text = if self.thumb_failed.contains(&url) { "No image" } else { "Loading..." };
                    self.request_thumbnail(&url);
                    ui.allocate_ui_with_layout(
                        CARD_THUMB,
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(text);
                        },
                    );
                }

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}:", self.t.t("time"))).strong());
                        ui.label(format_time(&record.timestamp));
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}:", self.t.t("situation"))).strong());
                        ui.label(self.t.t_with("detect", &[("type", record.alert_type.as_str())]));
                    });
                });
            });
        });

        inner
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(format!("#{index}"))
            .clicked()
    }

    fn render_alerts_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new(self.t.t("alertsTitle")).strong());
        ui.add_space(8.0);

        let mut filter = self.session.state().view.filter();
        egui::ComboBox::from_id_source("alert_filter")
            .selected_text(self.t.t(filter.label_key()))
            .show_ui(ui, |ui| {
                for order in [SortOrder::MostRecent, SortOrder::Oldest] {
                    ui.selectable_value(&mut filter, order, self.t.t(order.label_key()));
                }
            });
        self.session.set_filter(filter);
        ui.separator();

        let alerts: Vec<Alert> = self
            .session
            .state()
            .view
            .sorted_alerts()
            .into_iter()
            .cloned()
            .collect();
        egui::ScrollArea::vertical()
            .id_source("alert_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if !self.session.is_loaded() {
                    ui.spinner();
                }
                for alert in &alerts {
                    self.render_alert_item(ui, alert);
                    ui.add_space(6.0);
                }
            });
    }

    fn render_archive(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new(self.t.t("archiveTitle")).strong());
        ui.add_space(8.0);

        let view = &self.session.state().view;
        let cams = view.unique_cams();
        let selected = view.selected_cam().cloned();
        let mut clicked_cam: Option<CameraId> = None;
        ui.horizontal_wrapped(|ui| {
            for cam in &cams {
                let is_selected = selected.as_ref() == Some(cam);
                if ui.selectable_label(is_selected, cam.label()).clicked() {
                    clicked_cam = Some(cam.clone());
                }
            }
        });
        if let Some(cam) = clicked_cam {
            if let Err(err) = self.session.select_cam(&cam) {
                tracing::warn!("{err}");
            }
        }
        ui.separator();

        let records: Vec<Alert> = self
            .session
            .state()
            .view
            .archive_records()
            .into_iter()
            .cloned()
            .collect();
        let mut clicked_record: Option<Alert> = None;
        egui::ScrollArea::vertical()
            .id_source("record_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, record) in records.iter().enumerate() {
                    if self.render_record_card(ui, index, record) {
                        clicked_record = Some(record.clone());
                    }
                    ui.add_space(10.0);
                }
            });
        if let Some(record) = clicked_record {
            self.open_record(record);
        }
    }

    fn render_report_modal(&mut self, ctx: &egui::Context) {
        let Some(record) = self.session.state().report.selected_record().cloned() else {
            return;
        };
        let in_flight = self.session.state().report.is_in_flight();
        let mut close = false;
        let mut submit = false;

        egui::Window::new("Report")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} · {} · {}",
                        record.camera_id.label(),
                        record.alert_type,
                        format_time(&record.timestamp)
                    ))
                    .strong(),
                );
                ui.separator();

                let form = &mut self.draft.form;
                egui::Grid::new("report_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Worker");
                        ui.text_edit_singleline(&mut form.worker);
                        ui.end_row();
                        ui.label("Worker ID");
                        ui.text_edit_singleline(&mut form.worker_id);
                        ui.end_row();
                        ui.label("Department");
                        ui.text_edit_singleline(&mut form.department);
                        ui.end_row();
                        ui.label("Supervisor");
                        ui.text_edit_singleline(&mut form.supervisor);
                        ui.end_row();
                        ui.label("Time");
                        ui.text_edit_singleline(&mut form.timestamp);
                        ui.end_row();
                    });

                if let Some(error) = &self.draft.error {
                    ui.label(RichText::new(error).color(Color32::from_rgb(231, 76, 60)));
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.add_enabled(!in_flight, egui::Button::new("Submit")).clicked() {
                        submit = true;
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        if submit {
            self.submit_report();
        } else if close {
            self.session.close_modal();
        }
    }

    fn render_toast(&mut self, ctx: &egui::Context) {
        let toast = &self.session.state().toast;
        if !toast.is_visible() {
            return;
        }
        let message = toast.message().to_string();
        let mut dismiss = false;

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(message);
                        if ui.small_button("x").clicked() {
                            dismiss = true;
                        }
                    });
                });
            });

        if dismiss {
            self.session.dismiss_toast();
        }
    }
}

/// アイコン用の記号フォントを追加
pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\seguisym.ttf",
        "/System/Library/Fonts/Apple Symbols.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("symbol_fallback".to_string(), FontData::from_owned(data));
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("symbol_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();
        self.process_pending_thumbs(ctx);

        let state = self.session.state();
        if !self.session.is_loaded()
            || state.toast.is_visible()
            || state.report.is_in_flight()
            || !self.thumb_inflight.is_empty()
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟳ Refresh").clicked() {
                    self.refresh_key += 1;
                    self.session.set_refresh_key(self.refresh_key);
                }
                ui.separator();
                ui.label(
                    RichText::new(format!("{} alerts", self.session.state().view.alerts().len()))
                        .color(Color32::from_gray(170)),
                );
                if let Some(reason) = self.session.fetch_error() {
                    ui.label(RichText::new(reason).color(Color32::from_gray(120)).size(11.0));
                }
            });
        });

        egui::SidePanel::left("alerts")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.render_alerts_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_archive(ui);
        });

        self.render_report_modal(ctx);
        self.render_toast(ctx);
    }
}
