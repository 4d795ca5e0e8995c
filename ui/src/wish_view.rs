use kitty_core::render::{render_list, ItemHandle};
use kitty_core::wishes::WishStore;

use crate::actions::{self, ClearRequest, Notice, WishForm};
use crate::guestbook_view::show_row;
use crate::rows::WishRows;

/// 開いているダイアログ
enum Dialog {
    Edit { handle: ItemHandle, text: String },
    ConfirmDelete { handle: ItemHandle, preview: String },
    ConfirmClear,
}

/// 行のボタン操作
enum RowAction {
    Edit(ItemHandle, String),
    Delete(ItemHandle, String),
}

/// ウィッシュリスト
pub struct WishView {
    form: WishForm,
    dialog: Option<Dialog>,
}

impl WishView {
    pub fn new() -> Self {
        Self {
            form: WishForm::default(),
            dialog: None,
        }
    }

    /// 表示。操作結果の通知を返す
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, store: &mut WishStore) -> Option<Notice> {
        let mut notice = None;

        // 件数は描画のたびに最新のスナップショットから
        crate::emoji_label::emoji_heading(
            ui,
            format!("🎁 ウィッシュリスト（{} 件）", actions::wish_count(store)),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.form.content)
                    .desired_width(220.0)
                    .hint_text("ほしいもの..."),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("➕ 追加").clicked() || entered {
                notice = Some(actions::submit_wish(store, &mut self.form));
            }

            ui.weak(format!("{} 文字", self.form.char_count()));
        });

        // 描画のたびに最新のスナップショットからハンドルを振り直す
        let rendered = render_list(&store.snapshot(), &WishRows);
        let mut action = None;

        egui::ScrollArea::vertical()
            .id_salt("wish_list")
            .auto_shrink([false, false])
            .max_height(ui.available_height() - 40.0)
            .show(ui, |ui| {
                if let Some(placeholder) = &rendered.placeholder {
                    show_row(ui, placeholder);
                }
                for row in &rendered.items {
                    let Some(handle) = row.handle else { continue };
                    ui.horizontal(|ui| {
                        show_row(ui, row);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("🗑").clicked() {
                                action = Some(RowAction::Delete(handle, row.body.clone()));
                            }
                            if ui.small_button("✏").clicked() {
                                action = Some(RowAction::Edit(handle, row.body.clone()));
                            }
                        });
                    });
                    ui.separator();
                }
            });

        if ui.button("🧹 すべて削除").clicked() {
            match actions::request_clear(store) {
                ClearRequest::NothingToClear(n) => notice = Some(n),
                ClearRequest::NeedsConfirmation => self.dialog = Some(Dialog::ConfirmClear),
            }
        }

        match action {
            Some(RowAction::Edit(handle, text)) => self.dialog = Some(Dialog::Edit { handle, text }),
            Some(RowAction::Delete(handle, preview)) => {
                self.dialog = Some(Dialog::ConfirmDelete { handle, preview })
            }
            None => {}
        }

        if let Some(n) = self.show_dialog(ctx, store) {
            notice = Some(n);
        }

        notice
    }

    /// ダイアログ表示。OK/キャンセルが押されたらストアに反映して閉じる
    fn show_dialog(&mut self, ctx: &egui::Context, store: &mut WishStore) -> Option<Notice> {
        let dialog = self.dialog.as_mut()?;
        let mut answer: Option<bool> = None;

        let (title, message) = match &*dialog {
            Dialog::Edit { .. } => ("✏ お願いごとを編集", None),
            Dialog::ConfirmDelete { preview, .. } => {
                ("🗑 削除の確認", Some(format!("「{}」を削除しますか？", preview)))
            }
            Dialog::ConfirmClear => ("🧹 全削除の確認", Some("すべてのお願いごとを削除しますか？".to_string())),
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if let Dialog::Edit { text, .. } = dialog {
                    ui.text_edit_singleline(text);
                }
                if let Some(message) = &message {
                    crate::emoji_label::emoji_label(ui, message.as_str());
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("キャンセル").clicked() {
                        answer = Some(false);
                    }
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                });
            });

        let confirmed = answer?;
        match self.dialog.take()? {
            Dialog::Edit { handle, text } => {
                actions::edit_wish(store, handle, confirmed.then_some(text.as_str()))
            }
            Dialog::ConfirmDelete { handle, .. } => actions::delete_wish(store, handle, confirmed),
            Dialog::ConfirmClear => actions::clear_wishes(store, confirmed),
        }
    }
}
