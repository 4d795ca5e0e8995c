use kitty_core::PageCore;

use crate::actions::Notice;
use crate::guestbook_view::GuestbookView;
use crate::wish_view::WishView;

/// メインアプリケーション
pub struct KittyApp {
    core: Option<PageCore>,
    guestbook: Option<GuestbookView>,
    wishes: WishView,
    notice: Option<Notice>,
}

impl KittyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let (core, notice) = match PageCore::init_browser() {
            Ok(core) => {
                apply_theme(&cc.egui_ctx, core.theme.is_dark());
                (Some(core), None)
            }
            Err(e) => {
                log::error!("Failed to initialize core: {:?}", e);
                (None, Some(Notice::Error(format!("ストレージを開けませんでした: {}", e))))
            }
        };

        let guestbook = core.as_ref().map(|core| GuestbookView::new(&core.guestbook));

        Self {
            core,
            guestbook,
            wishes: WishView::new(),
            notice,
        }
    }

    /// ダークモード切り替え
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        let Some(core) = self.core.as_mut() else { return };
        match core.theme.toggle() {
            Ok(dark) => {
                log::info!("Dark mode: {}", dark);
                apply_theme(ctx, dark);
            }
            Err(e) => {
                log::error!("Failed to save theme: {:?}", e);
                self.notice = Some(Notice::Error(format!("設定を保存できませんでした: {}", e)));
            }
        }
    }
}

impl eframe::App for KittyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // トップバー
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                crate::emoji_label::emoji_heading(ui, "🐱 Kitty's Room");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let dark = ctx.style().visuals.dark_mode;
                    if ui.button(if dark { "☀" } else { "🌙" }).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        // 通知
        if let Some(notice) = &self.notice {
            let mut dismissed = false;
            egui::TopBottomPanel::bottom("notice").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    crate::emoji_label::notice_label(ui, notice);
                    if ui.small_button("✖").clicked() {
                        dismissed = true;
                    }
                });
            });
            if dismissed {
                self.notice = None;
            }
        }

        let Self {
            core,
            guestbook,
            wishes,
            notice,
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(core), Some(guestbook)) = (core.as_mut(), guestbook.as_mut()) else {
                ui.centered_and_justified(|ui| {
                    ui.label("ストレージが利用できないため、表示できません");
                });
                return;
            };

            ui.columns(2, |columns| {
                if let Some(n) = guestbook.show(&mut columns[0], &core.guestbook) {
                    *notice = Some(n);
                }
                if let Some(n) = wishes.show(ctx, &mut columns[1], &mut core.wishes) {
                    *notice = Some(n);
                }
            });
        });
    }
}

fn apply_theme(ctx: &egui::Context, dark: bool) {
    ctx.set_visuals(if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}
