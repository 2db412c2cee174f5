//! Subcommand implementations.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tabswitch_core::{MemoryDocument, SelectorConfig, TabLayout, TabSelector, check_layout};
use tabswitch_render::{WasmAssets, render_page};
use tracing::info;

fn load_layout(path: &Path) -> Result<TabLayout> {
    TabLayout::from_path(path).with_context(|| format!("failed to load layout {}", path.display()))
}

pub fn render(
    layout_path: &Path,
    config: &SelectorConfig,
    output: Option<&Path>,
    wasm_module: Option<String>,
) -> Result<ExitCode> {
    let layout = load_layout(layout_path)?;
    let assets = WasmAssets {
        module: wasm_module,
    };
    let html = render_page(&layout, config, &assets);

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// One line of simulator output.
#[derive(Debug, Serialize)]
struct Step<'a> {
    click: &'a str,
    active: Vec<String>,
    visible: Vec<String>,
}

pub fn simulate(
    layout_path: &Path,
    config: &SelectorConfig,
    clicks: &[String],
    json: bool,
) -> Result<ExitCode> {
    let layout = load_layout(layout_path)?;
    let doc = MemoryDocument::from_layout(&layout, config);
    let selector = TabSelector::discover(&doc, config.clone());

    let mut steps = Vec::with_capacity(clicks.len());
    for click in clicks {
        selector
            .click_by_id(click)
            .with_context(|| format!("click on `{}` failed", click))?;
        let state = selector.state();
        if !json {
            println!("click {} -> {}", click, state);
        }
        steps.push(Step {
            click,
            active: state.active,
            visible: state.visible,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn check(layout_path: &Path, json: bool) -> Result<ExitCode> {
    let layout = load_layout(layout_path)?;
    let issues = check_layout(&layout);
    let errors = issues.iter().filter(|i| i.is_error()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!(
            "ok: {} tabs, {} panels, no issues",
            layout.tabs.len(),
            layout.panels.len()
        );
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
        println!("{} issue(s), {} error(s)", issues.len(), errors);
    }

    Ok(if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
