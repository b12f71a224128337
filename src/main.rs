use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use serde::Serialize;
use tracing::info;

use plume_core::{PosHint, PosHintEntry, SizeHint, Widget, WidgetId};
use plume_layout::FloatLayout;
use plume_runtime::UiRuntime;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

#[derive(Parser)]
#[command(name = "plume")]
#[command(about = "Float-layout playground: builds a widget tree and prints computed geometry")]
struct Args {
    /// Root container width
    #[arg(long, default_value = "800")]
    width: f32,

    /// Root container height
    #[arg(long, default_value = "600")]
    height: f32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tree")]
    format: OutputFormat,

    /// Show size/pos hints next to each widget
    #[arg(long)]
    show_hints: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if args.width <= 0.0 || args.height <= 0.0 {
        anyhow::bail!("Root size must be positive: {}x{}", args.width, args.height);
    }

    let mut ui = UiRuntime::new();
    let root = build_scene(&mut ui)?;

    info!("Laying out scene at {}x{}", args.width, args.height);
    ui.set_size(root, Vec2::new(args.width, args.height))?;
    ui.update()?;

    let output = match args.format {
        OutputFormat::Tree => {
            let mut out = String::new();
            render_widget_tree(&mut out, &ui, root, 0, true, args.show_hints)?;
            out
        }
        OutputFormat::Json => {
            let report = build_report(&ui, root)?;
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            out
        }
    };
    print!("{}", output);

    Ok(())
}

/// A window-sized float layout exercising every hint family: full-bleed
/// fill, edge-pinned bars, a centered dialog, a fixed-size corner badge
/// and a nested float container.
fn build_scene(ui: &mut UiRuntime) -> Result<WidgetId> {
    let root = ui.insert(Widget::named("window"));
    ui.set_layout(root, Box::new(FloatLayout))?;

    let backdrop = ui.insert(
        Widget::named("backdrop").with_pos_hint(PosHint::new().with(PosHintEntry::Pos(0.0, 0.0))),
    );

    let sidebar = ui.insert(
        Widget::named("sidebar")
            .with_size_hint(SizeHint::new(0.25, 0.9))
            .with_pos_hint(PosHint::new().with(PosHintEntry::Pos(0.0, 0.0))),
    );

    let header = ui.insert(
        Widget::named("header")
            .with_size_hint(SizeHint::new(1.0, 0.1))
            .with_pos_hint(
                PosHint::new()
                    .with(PosHintEntry::X(0.0))
                    .with(PosHintEntry::Top(1.0)),
            ),
    );

    let dialog = ui.insert(
        Widget::named("dialog")
            .with_size_hint(SizeHint::new(0.5, 0.25))
            .with_pos_hint(PosHint::new().with(PosHintEntry::Center(0.5, 0.5))),
    );

    let badge = ui.insert(
        Widget::named("badge")
            .with_size(Vec2::new(48.0, 48.0))
            .with_size_hint(SizeHint::none())
            .with_pos_hint(
                PosHint::new()
                    .with(PosHintEntry::Right(1.0))
                    .with(PosHintEntry::Top(1.0)),
            ),
    );

    for child in [backdrop, sidebar, header, dialog, badge] {
        ui.add_widget(root, child)?;
    }

    // Nested container: the panel is placed by the window's layout, then
    // lays out its own child.
    let panel = ui.insert(
        Widget::named("panel")
            .with_size_hint(SizeHint::new(0.25, 0.4))
            .with_pos_hint(
                PosHint::new()
                    .with(PosHintEntry::Right(1.0))
                    .with(PosHintEntry::Y(0.0)),
            ),
    );
    ui.set_layout(panel, Box::new(FloatLayout))?;
    ui.add_widget(root, panel)?;

    let panel_item = ui.insert(
        Widget::named("panel_item")
            .with_size_hint(SizeHint::new(0.8, 0.5))
            .with_pos_hint(PosHint::new().with(PosHintEntry::Center(0.5, 0.5))),
    );
    ui.add_widget(panel, panel_item)?;

    Ok(root)
}

fn render_widget_tree(
    output: &mut String,
    ui: &UiRuntime,
    id: WidgetId,
    depth: usize,
    is_last: bool,
    show_hints: bool,
) -> Result<()> {
    let widget = ui.widget(id)?;

    let tree_char = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };
    let indent = if depth == 0 {
        String::new()
    } else {
        "│   ".repeat(depth - 1) + tree_char
    };

    output.push_str(&format!(
        "{}{} pos:({:.0},{:.0}) size:({:.0},{:.0})",
        indent, widget.name, widget.position.x, widget.position.y, widget.size.x, widget.size.y
    ));

    if show_hints {
        let mut inline = Vec::new();
        match (widget.size_hint.width, widget.size_hint.height) {
            (Some(w), Some(h)) => inline.push(format!("size_hint:({},{})", w, h)),
            (Some(w), None) => inline.push(format!("size_hint_w:{}", w)),
            (None, Some(h)) => inline.push(format!("size_hint_h:{}", h)),
            (None, None) => {}
        }
        if !widget.pos_hint.is_empty() {
            let entries: Vec<String> = widget.pos_hint.iter().map(|e| format!("{:?}", e)).collect();
            inline.push(format!("pos_hint:[{}]", entries.join(" ")));
        }
        if !inline.is_empty() {
            output.push_str(&format!(" [{}]", inline.join(" ")));
        }
    }
    output.push('\n');

    let children = widget.children.clone();
    let child_count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        render_widget_tree(output, ui, child, depth + 1, i == child_count - 1, show_hints)?;
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct WidgetReport {
    name: String,
    pos: [f32; 2],
    size: [f32; 2],
    size_hint: SizeHint,
    pos_hint: PosHint,
    children: Vec<WidgetReport>,
}

fn build_report(ui: &UiRuntime, id: WidgetId) -> Result<WidgetReport> {
    let widget = ui.widget(id)?;
    let mut children = Vec::with_capacity(widget.children.len());
    for &child in &widget.children {
        children.push(build_report(ui, child)?);
    }
    Ok(WidgetReport {
        name: widget.name.clone(),
        pos: [widget.position.x, widget.position.y],
        size: [widget.size.x, widget.size.y],
        size_hint: widget.size_hint,
        pos_hint: widget.pos_hint.clone(),
        children,
    })
}
