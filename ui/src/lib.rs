mod actions;
mod rows;

// 以下はeframeのアプリからのみ使う
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod emoji_label;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod guestbook_view;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod wish_view;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::KittyApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM初期化とパニックフック設定
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // パニック時にコンソールにスタックトレースを表示
    console_error_panic_hook::set_once();

    // ログ設定（二重初期化は無視）
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("Logger already initialized");
    }

    log::info!("Kitty page WASM initialized");
}

/// Webアプリケーションのエントリーポイント
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start_app(canvas_id: String) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or("No document")?;

    let canvas = document
        .get_element_by_id(&canvas_id)
        .ok_or("Canvas not found")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| {
                let mut style = (*cc.egui_ctx.style()).clone();
                style.spacing.item_spacing = egui::vec2(10.0, 10.0);
                style.spacing.button_padding = egui::vec2(12.0, 6.0);
                cc.egui_ctx.set_style(style);

                Ok(Box::new(KittyApp::new(cc)))
            }),
        )
        .await?;

    Ok(())
}
