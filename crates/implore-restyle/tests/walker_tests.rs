//! Formatting pass integration tests
//!
//! End-to-end scenarios over `MemoryScene`.

mod common;

use common::fixtures::{init_tracing, nz, single_axes_scene, two_panel_scene};
use implore_restyle::{
    format_all, ColorTable, DashPattern, DimensionSource, FormatConfig, Formatter, Handle,
    LegendLocation, MemoryScene, Placement, Scene, TextRole, TickDirection,
};

fn default_formatter() -> Formatter {
    Formatter::with_defaults().unwrap()
}

// === Line styling ===

#[test]
fn test_three_lines_no_wraparound() {
    init_tracing();
    let (mut scene, _, lines) = single_axes_scene(3);
    let formatter = default_formatter();
    formatter.format(&mut scene);

    let palette = formatter.palette().colors();
    let patterns = formatter.style_pattern().patterns();
    for (i, line) in lines.iter().enumerate() {
        let style = scene.line_style(*line).unwrap();
        assert_eq!(style.color, palette[i]);
        assert_eq!(style.dash, patterns[i]);
        assert_eq!(style.width, 2.0);
    }
}

#[test]
fn test_nine_lines_wrap_independently() {
    init_tracing();
    let (mut scene, _, lines) = single_axes_scene(9);
    let formatter = default_formatter();
    formatter.format(&mut scene);

    let palette = formatter.palette().colors();
    assert_eq!(palette.len(), 7);

    let line8 = scene.line_style(lines[7]).unwrap();
    let line9 = scene.line_style(lines[8]).unwrap();
    assert_eq!(line8.color, palette[0]);
    assert_eq!(line9.color, palette[1]);
    assert_eq!(line8.dash, DashPattern::DashDot);
    assert_eq!(line9.dash, DashPattern::Solid);
}

#[test]
fn test_line_ordinal_restarts_per_axes() {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let a1 = scene.add_axes(fig, true);
    let a2 = scene.add_axes(fig, true);
    scene.add_line(a1);
    scene.add_line(a1);
    let first_in_a2 = scene.add_line(a2);

    let formatter = default_formatter();
    formatter.format(&mut scene);
    assert_eq!(scene.line_style(first_in_a2), Some(&formatter.line_style(nz(1))));
}

/// Backend that reports lines newest-first; the walker must still assign
/// styles in creation order.
/// Enumerates every node list backwards and records figure visits
struct ReversedScene(MemoryScene, Vec<Handle>);

impl Scene for ReversedScene {
    fn figures(&self) -> Vec<Handle> {
        let mut f = self.0.figures();
        f.reverse();
        f
    }
    fn screen_size(&self) -> implore_restyle::ScreenSize {
        self.0.screen_size()
    }
    fn set_figure_style(&mut self, figure: Handle, style: &implore_restyle::FigureStyle) {
        self.1.push(figure);
        self.0.set_figure_style(figure, style)
    }
    fn axes(&self, figure: Handle) -> Vec<implore_restyle::AxesInfo> {
        let mut a = self.0.axes(figure);
        a.reverse();
        a
    }
    fn current_axes(&self, figure: Handle) -> Option<Handle> {
        self.0.current_axes(figure)
    }
    fn box_on(&self, axes: Handle) -> bool {
        self.0.box_on(axes)
    }
    fn set_axes_style(&mut self, axes: Handle, style: &implore_restyle::AxesStyle) {
        self.0.set_axes_style(axes, style)
    }
    fn lines(&self, axes: Handle) -> Vec<Handle> {
        let mut l = self.0.lines(axes);
        l.reverse();
        l
    }
    fn set_line_style(&mut self, line: Handle, style: &implore_restyle::LineStyleSpec) {
        self.0.set_line_style(line, style)
    }
    fn texts(&self, figure: Handle) -> Vec<implore_restyle::TextInfo> {
        let mut t = self.0.texts(figure);
        t.reverse();
        t
    }
    fn set_text_style(&mut self, text: Handle, treatment: &implore_restyle::FontTreatment) {
        self.0.set_text_style(text, treatment)
    }
    fn legend(&self, axes: Handle) -> Option<Handle> {
        self.0.legend(axes)
    }
    fn set_legend_style(&mut self, legend: Handle, style: &implore_restyle::LegendStyle) {
        self.0.set_legend_style(legend, style)
    }
    fn surfaces(&self) -> Vec<implore_restyle::SurfaceInfo> {
        self.0.surfaces()
    }
    fn set_surface_alpha(&mut self, surface: Handle, alpha: f64) {
        self.0.set_surface_alpha(surface, alpha)
    }
}

#[test]
fn test_enumeration_order_does_not_matter() {
    let (scene, _, lines) = single_axes_scene(5);
    let mut reversed = ReversedScene(scene.clone(), Vec::new());
    let mut forward = scene;

    let formatter = default_formatter();
    formatter.format(&mut forward);
    formatter.format(&mut reversed);

    assert_eq!(reversed.0, forward);
    assert_eq!(forward.line_style(lines[0]), Some(&formatter.line_style(nz(1))));
}

// === Text roles ===

#[test]
fn test_2d_xlabel_and_title() {
    init_tracing();
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let ax = scene.add_axes(fig, true);
    let xlabel = scene.add_label(ax, "time [s]", Placement::xlabel());
    let title = scene.add_label(ax, "Response", Placement::title());

    let formatter = default_formatter();
    formatter.format(&mut scene);

    let x = scene.text_style(xlabel).unwrap();
    assert_eq!(x, formatter.fonts().for_role(TextRole::XLabel));
    assert_eq!(x.size_px, 16.0);

    let t = scene.text_style(title).unwrap();
    assert_eq!(t, formatter.fonts().for_role(TextRole::Title));
    assert_eq!(t.size_px, 18.0);
}

#[test]
fn test_two_panel_roles() {
    let mut scene = two_panel_scene();
    let formatter = default_formatter();
    formatter.format(&mut scene);

    let fig = scene.figures()[0];
    let fonts = formatter.fonts();
    let sizes: Vec<(String, f64)> = scene
        .texts(fig)
        .into_iter()
        .map(|t| (t.content.clone(), scene.text_style(t.handle).unwrap().size_px))
        .collect();

    assert_eq!(
        sizes,
        vec![
            ("time [s]".to_string(), fonts.x_label.size_px),
            ("amplitude".to_string(), fonts.y_label.size_px),
            ("Signal".to_string(), fonts.title.size_px),
            ("x".to_string(), fonts.x_label.size_px),
            ("y".to_string(), fonts.y_label.size_px),
            ("z".to_string(), fonts.z_label.size_px),
            ("Field".to_string(), fonts.title.size_px),
            ("draft".to_string(), fonts.default.size_px),
        ]
    );
}

#[test]
fn test_dimension_source_owning_vs_current() {
    // A 3D x-label on a 3D panel while a 2D panel has focus
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let volume = scene.add_axes(fig, false);
    let label = scene.add_label(volume, "x", Placement::xlabel_3d());
    let flat = scene.add_axes(fig, true);
    assert_eq!(scene.current_axes(fig), Some(flat));

    let text = scene.texts(fig).into_iter().find(|t| t.handle == label).unwrap();

    let owning = default_formatter();
    assert_eq!(owning.dimension_source(), DimensionSource::OwningAxes);
    assert!(!owning.signature(&scene, &text, Some(flat)).box_on);

    let config = FormatConfig {
        dimension_source: DimensionSource::CurrentAxes,
        ..Default::default()
    };
    let current = config.resolve(ColorTable::global()).unwrap();
    // Judged by the focused 2D panel, so the 3D rule no longer applies
    assert!(current.signature(&scene, &text, Some(flat)).box_on);

    let mut a = scene.clone();
    owning.format(&mut a);
    assert_eq!(a.text_style(label), Some(&owning.fonts().x_label));

    let mut b = scene.clone();
    current.format(&mut b);
    assert_eq!(b.text_style(label), Some(&current.fonts().default));
}

#[test]
fn test_current_axes_results_follow_focus() {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let volume = scene.add_axes(fig, false);
    let label = scene.add_label(volume, "z", Placement::zlabel_3d());
    let flat = scene.add_axes(fig, true);

    let config = FormatConfig {
        dimension_source: DimensionSource::CurrentAxes,
        ..Default::default()
    };
    let formatter = config.resolve(ColorTable::global()).unwrap();

    // 90 degree center/bottom reads as a y-label on 2D axes
    scene.set_current_axes(fig, flat);
    let mut focused_flat = scene.clone();
    formatter.format(&mut focused_flat);
    assert_eq!(focused_flat.text_style(label), Some(&formatter.fonts().y_label));

    scene.set_current_axes(fig, volume);
    formatter.format(&mut scene);
    assert_eq!(scene.text_style(label), Some(&formatter.fonts().z_label));
}

#[test]
fn test_figure_level_text_without_axes_is_2d() {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let text = scene.add_text(fig, None, "Overview", Placement::title());

    let formatter = default_formatter();
    formatter.format(&mut scene);
    assert_eq!(scene.text_style(text), Some(&formatter.fonts().title));
}

// === Figure, axes, legend, surfaces ===

#[test]
fn test_figure_axes_and_legend_decoration() {
    let mut scene = two_panel_scene();
    let formatter = default_formatter();
    formatter.format(&mut scene);

    let fig = scene.figures()[0];
    let figure = scene.figure_style(fig).unwrap();
    assert_eq!((figure.width, figure.height), (800.0, 600.0));
    assert_eq!(figure.left, 5.0);
    assert_eq!(figure.bottom, 1080.0 - 600.0 - 85.0);
    assert_eq!(figure.background.to_array(), [1.0, 1.0, 1.0]);

    for info in scene.axes(fig) {
        let style = scene.axes_style(info.handle);
        if info.is_plot_axes() {
            let style = style.unwrap();
            assert!(style.grid);
            assert!(style.tight_bounds);
            assert_eq!(style.tick_direction, TickDirection::In);
            assert_eq!(style.tick_length, 0.0);
        } else {
            // Legend containers are not treated as plotting axes
            assert!(style.is_none());
            let legend = scene.legend_style(info.handle).unwrap();
            assert_eq!(legend.location, LegendLocation::Best);
            assert_eq!(legend.border_width, 0.5);
            assert!(legend.font.size_px < 16.0);
        }
    }
}

#[test]
fn test_only_opaque_surfaces_refreshed() {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let ax = scene.add_axes(fig, false);
    let opaque = scene.add_surface(ax, 1.0);
    let translucent = scene.add_surface(ax, 0.4);

    default_formatter().format(&mut scene);
    assert!(scene.surface_refreshed(opaque));
    assert_eq!(scene.surface_alpha(opaque), Some(1.0));
    assert!(!scene.surface_refreshed(translucent));
    assert_eq!(scene.surface_alpha(translucent), Some(0.4));
}

// === Whole-pass properties ===

#[test]
fn test_empty_scene_is_noop() {
    init_tracing();
    let mut scene = MemoryScene::default();
    let before = scene.clone();
    format_all(&mut scene).unwrap();
    assert_eq!(scene, before);
    assert!(scene.is_untouched());
}

#[test]
fn test_formatting_is_idempotent() {
    let mut once = two_panel_scene();
    let formatter = default_formatter();
    formatter.format(&mut once);

    let mut twice = once.clone();
    formatter.format(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn test_figures_visited_in_creation_order() {
    let mut scene = MemoryScene::default();
    let f1 = scene.add_figure();
    let f2 = scene.add_figure();
    let f3 = scene.add_figure();

    let mut reversed = ReversedScene(scene, Vec::new());
    let summary = default_formatter().format_with_summary(&mut reversed);
    assert_eq!(summary.figures, 3);
    assert_eq!(reversed.1, vec![f1, f2, f3]);
}

#[test]
fn test_each_axes_restarts_line_cycle() {
    let mut scene = MemoryScene::default();
    let f1 = scene.add_figure();
    let a1 = scene.add_axes(f1, true);
    let f2 = scene.add_figure();
    let a2 = scene.add_axes(f2, true);
    let l1 = scene.add_line(a1);
    let l2 = scene.add_line(a2);

    let summary = default_formatter().format_with_summary(&mut scene);
    assert_eq!(summary.axes, 2);
    assert_eq!(scene.line_style(l1), scene.line_style(l2));
}

#[test]
fn test_json_scene_round_trip_after_format() {
    let mut scene = two_panel_scene();
    format_all(&mut scene).unwrap();
    let restored = MemoryScene::from_json(&scene.to_json().unwrap()).unwrap();
    assert_eq!(restored, scene);
}
