use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use rendering::palette::hex_to_bevy;

/// When set, render one frame to this PNG path and exit.
const SCREENSHOT_ENV: &str = "CLIMATE_ATLAS_SCREENSHOT";

/// Frames to wait for data, geometry and egui layout to settle.
const SCREENSHOT_DELAY_FRAMES: u32 = 30;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Climate Atlas".to_string(),
            resolution: (1280.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(hex_to_bevy(ui::theme::PAGE_BACKGROUND)))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        climate::ClimatePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    if let Ok(path) = std::env::var(SCREENSHOT_ENV) {
        info!("Screenshot mode: writing {path}");
        app.insert_resource(WinitSettings::continuous())
            .insert_resource(ScreenshotJob { frame: 0, path })
            .add_systems(Update, drive_screenshot);
    }

    app.run();
}

#[derive(Resource)]
struct ScreenshotJob {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut job: ResMut<ScreenshotJob>,
    mut exit: EventWriter<AppExit>,
) {
    job.frame += 1;
    if job.frame == SCREENSHOT_DELAY_FRAMES {
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(job.path.clone()));
    } else if job.frame > SCREENSHOT_DELAY_FRAMES + 20 {
        exit.send(AppExit::Success);
    }
}
