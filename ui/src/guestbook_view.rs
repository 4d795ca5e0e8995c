use kitty_core::guestbook::GuestbookStore;
use kitty_core::render::{render_list, Snapshot};
use kitty_core::types::Message;

use crate::actions::{self, GuestbookForm, Notice};
use crate::rows::{ListRow, MessageRows};

/// ゲストブック（入力フォーム + メッセージ一覧）
pub struct GuestbookView {
    form: GuestbookForm,
    messages: Vec<Message>,
}

impl GuestbookView {
    pub fn new(store: &GuestbookStore) -> Self {
        let mut view = Self {
            form: GuestbookForm::default(),
            messages: Vec::new(),
        };
        view.refresh(store);
        view
    }

    /// ストアから読み直す
    fn refresh(&mut self, store: &GuestbookStore) {
        match store.list() {
            Ok(messages) => self.messages = messages,
            Err(e) => log::error!("Failed to load guestbook: {:?}", e),
        }
    }

    /// 表示。送信したら通知を返す
    pub fn show(&mut self, ui: &mut egui::Ui, store: &GuestbookStore) -> Option<Notice> {
        let mut notice = None;

        crate::emoji_label::emoji_heading(ui, "📖 ゲストブック");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("名前");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.username)
                    .desired_width(160.0)
                    .hint_text("ニックネーム"),
            );
        });

        let response = ui.add(
            egui::TextEdit::multiline(&mut self.form.content)
                .desired_width(f32::INFINITY)
                .desired_rows(3)
                .hint_text("メッセージを残してね..."),
        );

        // Enter + Ctrl/Cmd で送信
        let mut should_send =
            response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);
        if ui.button("📮 送信").clicked() {
            should_send = true;
        }

        if should_send {
            notice = Some(actions::submit_guestbook(store, &mut self.form));
            self.refresh(store);
        }

        ui.separator();

        let rendered = render_list(&Snapshot::new(&self.messages, 0), &MessageRows);
        egui::ScrollArea::vertical()
            .id_salt("guestbook_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // 固定の挨拶 → メッセージ（新しい順）
                for row in rendered.rows() {
                    show_row(ui, row);
                    ui.separator();
                }
            });

        notice
    }
}

/// 1行表示（タイトル・時刻・本文）
pub fn show_row(ui: &mut egui::Ui, row: &ListRow) {
    ui.vertical(|ui| {
        if !row.title.is_empty() || !row.time.is_empty() {
            ui.horizontal(|ui| {
                if !row.title.is_empty() {
                    crate::emoji_label::emoji_label(ui, egui::RichText::new(&row.title).strong());
                }
                ui.weak(&row.time);
            });
        }
        crate::emoji_label::emoji_label(ui, row.body.as_str());
    });
}
