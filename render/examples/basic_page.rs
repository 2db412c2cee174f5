//! Basic tab page generation example.
//!
//! Run with: `cargo run --example basic_page`

use tabswitch_core::{PanelSpec, SelectorConfig, TabLayout, TabSpec};
use tabswitch_render::{WasmAssets, render_page};

fn main() {
    let layout = TabLayout {
        title: Some("Account".into()),
        tabs: vec![
            TabSpec::new("tab-profile", "Profile", "panel-profile").active(),
            TabSpec::new("tab-security", "Security", "panel-security"),
        ],
        panels: vec![
            PanelSpec::new("panel-profile", "Name, avatar and bio.").visible(),
            PanelSpec::new("panel-security", "Password and sessions."),
        ],
    };

    // Point at the wasm-pack output so clicks switch tabs in the browser
    let assets = WasmAssets::module("./pkg/tabswitch_wasm.js");

    let html = render_page(&layout, &SelectorConfig::default(), &assets);

    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
