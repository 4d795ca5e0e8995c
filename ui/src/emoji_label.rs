use egui_twemoji::EmojiLabel;

use crate::actions::Notice;

/// カラー絵文字をサポートするラベルを表示
pub fn emoji_label(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    EmojiLabel::new(text.into()).show(ui);
}

/// カラー絵文字をサポートするヘッダーを表示
pub fn emoji_heading(ui: &mut egui::Ui, text: impl Into<String>) {
    let rich_text = egui::RichText::new(text.into()).heading();
    EmojiLabel::new(rich_text).show(ui);
}

/// 通知を種類ごとの色で表示
pub fn notice_label(ui: &mut egui::Ui, notice: &Notice) {
    let color = match notice {
        Notice::Success(_) => egui::Color32::from_rgb(80, 180, 110),
        Notice::Info(_) => ui.visuals().text_color(),
        Notice::Warning(_) => egui::Color32::from_rgb(230, 170, 40),
        Notice::Error(_) => ui.visuals().error_fg_color,
    };
    emoji_label(ui, egui::RichText::new(notice.text()).color(color));
}
