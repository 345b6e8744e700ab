use glint::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use glint::renderer::Renderer;
use glint::scene::Scene;
use glint::util::FpsCounter;
use sdl2::keyboard::Keycode;

/// Parse command line arguments and return (width, height, vsync, scene_path)
fn parse_args() -> (u32, u32, bool, String) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;
    let mut scene_path = String::from("scene.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    scene_path = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: glint [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --scene PATH, -s PATH Scene file (default: scene.json)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync, scene_path)
}

fn main() -> Result<(), String> {
    let (width, height, vsync, scene_path) = parse_args();

    let (mut display, texture_creator) = Display::with_options("glint", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;

    // Load scene or fall back to the built-in reference sphere
    let mut scene = Scene::load(&scene_path).unwrap_or_else(|_| Scene::default());

    let mut renderer = Renderer::new();
    renderer.resize(width, height);

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;

    println!("=== glint ===");
    println!("Resolution: {}x{}", width, height);
    println!("Spheres: {}", scene.spheres.len());
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  F          - Toggle FPS in the window title");
    println!("  B          - Toggle behind-camera hit culling");
    println!("  S          - Save scene");
    println!("  L          - Load scene");
    println!("  Escape     - Quit");

    'main: loop {
        let (_dt, _current_fps, avg_fps) = fps_counter.tick();

        // Handle input
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::F => show_fps = !show_fps,
                    Keycode::B => {
                        let cull = !renderer.cull_behind();
                        renderer.set_cull_behind(cull);
                        println!("Behind-camera culling: {}", if cull { "ON" } else { "OFF" });
                    },
                    Keycode::S => {
                        if let Err(e) = scene.save(&scene_path) {
                            eprintln!("Failed to save: {}", e);
                        } else {
                            println!("Scene saved to {}", scene_path);
                        }
                    },
                    Keycode::L => match Scene::load(&scene_path) {
                        Ok(loaded) => {
                            scene = loaded;
                            println!("Scene loaded from {}", scene_path);
                        },
                        Err(e) => eprintln!("Failed to load: {}", e),
                    },
                    _ => {},
                },
                InputEvent::Resize { width, height } => {
                    renderer.resize(width, height);
                    if width > 0 && height > 0 {
                        target = RenderTarget::with_size(&texture_creator, width, height)?;
                    }
                },
            }
        }

        renderer.render(&scene);

        if show_fps {
            let title = format!(
                "glint - {:.0} fps ({:.1} ms)",
                avg_fps,
                fps_counter.avg_frame_time_ms()
            );
            display.set_title(&title)?;
        }

        // Skip presentation while the window reports a zero-sized surface
        if renderer.width() > 0 && renderer.height() > 0 {
            display.present(&mut target, &renderer)?;
        }
    }

    Ok(())
}
