//! Scene fixtures shared by the integration tests

#![allow(dead_code)]

use std::num::NonZeroUsize;

use implore_restyle::{Handle, MemoryScene, Placement};

/// Route `tracing` output through the test harness (`RUST_LOG` to filter)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("ordinal must be positive")
}

/// One figure with one boxed (2D) axes holding `lines` lines
pub fn single_axes_scene(lines: usize) -> (MemoryScene, Handle, Vec<Handle>) {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();
    let ax = scene.add_axes(fig, true);
    let handles = (0..lines).map(|_| scene.add_line(ax)).collect();
    (scene, ax, handles)
}

/// A figure with a 2D panel and a 3D panel, each fully labelled, plus a
/// legend and a surface on the 3D panel
pub fn two_panel_scene() -> MemoryScene {
    let mut scene = MemoryScene::default();
    let fig = scene.add_figure();

    let flat = scene.add_axes(fig, true);
    scene.add_line(flat);
    scene.add_line(flat);
    scene.add_label(flat, "time [s]", Placement::xlabel());
    scene.add_label(flat, "amplitude", Placement::ylabel());
    scene.add_label(flat, "Signal", Placement::title());
    scene.add_legend(flat);

    let volume = scene.add_axes(fig, false);
    scene.add_line(volume);
    scene.add_label(volume, "x", Placement::xlabel_3d());
    scene.add_label(volume, "y", Placement::ylabel_3d());
    scene.add_label(volume, "z", Placement::zlabel_3d());
    scene.add_label(volume, "Field", Placement::title());
    scene.add_surface(volume, 1.0);

    scene.add_text(fig, None, "draft", Placement::annotation());
    scene
}
