use std::time::Duration;

use roundcheck::core::window::{ElementState, MouseButton};
use roundcheck::prelude::*;

/// Drives a [RoundCheckBox] through a few synthetic frames without a
/// window: layout, a click at the widget center, and renders into a
/// [Scene] while the reveal animation plays.
fn main() {
    env_logger::init();

    println!("Round Checkbox Demo");
    println!("===================");

    let checked = StateSignal::new(false);
    let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()))
        .with_on_toggle({
            let checked = checked.clone();
            move |value| {
                println!("toggled -> {}", value);
                checked.set(value);
            }
        });

    let layout = compute_root_layout(&checkbox.layout_style(), Vector2::new(100.0, 100.0))
        .expect("layout failed");
    println!(
        "laid out at {}x{}",
        layout.layout.size.width, layout.layout.size.height
    );

    let mut info = AppInfo::default();
    let mut theme = LightTheme;
    let mut scene = Scene::new();

    // First frame settles the widget, then a click at its center.
    checkbox.update(&layout, &mut info);
    let bounds_center = Vector2::new(
        (layout.layout.location.x + layout.layout.size.width / 2.0) as f64,
        (layout.layout.location.y + layout.layout.size.height / 2.0) as f64,
    );
    info.buttons.clear();
    info.cursor_pos = Some(bounds_center);
    info.buttons.push((MouseButton::Left, ElementState::Released));
    checkbox.update(&layout, &mut info);
    assert!(*checked.get());

    // Play the reveal animation across a few 40ms frames.
    info.buttons.clear();
    for frame in 0..6 {
        info.now += Duration::from_millis(40);
        let update = checkbox.update(&layout, &mut info);

        scene.reset();
        let mut graphics = VelloGraphics::new(&mut scene);
        checkbox.render(&mut graphics, &mut theme, &layout, &mut info);

        println!(
            "frame {}: redraw requested = {}",
            frame,
            update.contains(Update::DRAW)
        );
    }

    let mut semantics = SemanticsNode::default();
    checkbox.semantics(&mut semantics);
    println!(
        "semantics: role = {:?}, toggled = {:?}",
        semantics.role(),
        semantics.toggled()
    );
}
