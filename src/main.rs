//! Shape Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints};

    use shape_drop::Settings;
    use shape_drop::renderer::{CanvasRenderer, build_scene};
    use shape_drop::sim::{GameEvent, Session};

    // JS binding for the ml5 hand-pose detector
    #[wasm_bindgen(inline_js = "
        export function start_hand_pose(video, on_hands) {
            if (typeof ml5 === 'undefined') {
                console.error('ml5 is not loaded, hand tracking disabled');
                return;
            }
            const model = ml5.handPose(() => {
                console.log('handPose model ready');
                model.detectStart(video, (results) => {
                    const hands = results.map((h) => ({
                        keypoints: h.keypoints.map((k) => ({ x: k.x, y: k.y, name: k.name })),
                    }));
                    on_hands(JSON.stringify(hands));
                });
            });
        }
    ")]
    extern "C" {
        fn start_hand_pose(video: &HtmlVideoElement, on_hands: &js_sys::Function);
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        settings: Settings,
        camera_ready: bool,
    }

    impl Game {
        /// Run one frame and draw it
        fn frame(&mut self, time: f64) {
            for event in self.session.update(time) {
                match event {
                    GameEvent::Solved { kind } => log::info!("Success! ({})", kind.as_str()),
                    GameEvent::RoundStarted { kind } => log::info!("New round: {}", kind.as_str()),
                }
            }

            let result = if self.camera_ready {
                let tips = self.session.fingertips();
                let scene = build_scene(&self.session.controller, &tips, &self.settings);
                self.renderer.draw(&scene)
            } else {
                self.renderer.clear()
            };
            if let Err(e) = result {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Shape Drop starting...");

        let settings = Settings::load().validated();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(settings.frame_width as u32);
        canvas.set_height(settings.frame_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Hidden video element fed by the webcam
        let video: HtmlVideoElement = document
            .create_element("video")
            .expect("create video")
            .dyn_into()
            .expect("not a video element");
        let _ = video.set_attribute("playsinline", "");
        video.set_muted(true);
        video.set_width(settings.frame_width as u32);
        video.set_height(settings.frame_height as u32);

        let renderer = CanvasRenderer::new(
            ctx,
            video.clone(),
            settings.frame_width as f64,
            settings.frame_height as f64,
            settings.mirror,
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, &settings),
            renderer,
            settings: settings.clone(),
            camera_ready: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        // Start game loop right away so the canvas isn't blank while the camera starts
        request_animation_frame(game.clone());

        match start_camera(&video, &settings).await {
            Ok(()) => {
                log::info!("capture ready.");
                game.borrow_mut().camera_ready = true;
                setup_hand_pose(&video, game);
            }
            Err(e) => log::error!("Camera unavailable: {:?}", e),
        }

        log::info!("Shape Drop running!");
    }

    async fn start_camera(video: &HtmlVideoElement, settings: &Settings) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let devices = window.navigator().media_devices()?;

        let video_constraints = js_sys::Object::new();
        js_sys::Reflect::set(&video_constraints, &"width".into(), &settings.frame_width.into())?;
        js_sys::Reflect::set(&video_constraints, &"height".into(), &settings.frame_height.into())?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::FALSE);
        constraints.set_video(&video_constraints);

        let stream: MediaStream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
            .await?
            .dyn_into()?;
        video.set_src_object(Some(&stream));
        JsFuture::from(video.play()?).await?;
        Ok(())
    }

    fn setup_hand_pose(video: &HtmlVideoElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(String)>::new(move |json: String| {
            game.borrow_mut().session.post_detections_json(&json);
        });
        start_hand_pose(video, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shape_drop::Settings;
    use shape_drop::sim::{DemoHand, GameEvent, Session};

    env_logger::init();
    log::info!("Shape Drop (native) starting...");
    log::info!("No camera on native - a scripted hand plays instead. Run with `trunk serve` for the web version");

    let settings = Settings::load().validated();
    let mut session = Session::new(0x5eed, &settings);
    let mut hand = DemoHand::new(12.0, settings.fingertip_index);

    // 30 simulated seconds at 60 fps
    let frame_ms = 1000.0 / 60.0;
    let mut solved = 0u32;
    for frame in 0..1800u32 {
        let batch = hand.detections(&session.controller);
        session.post_detections(batch);
        for event in session.update(frame as f64 * frame_ms) {
            if let GameEvent::Solved { kind } = event {
                solved += 1;
                println!("✓ {} solved at {:.1}s", kind.as_str(), frame as f64 * frame_ms / 1000.0);
            }
        }
    }
    println!("\n{} rounds solved in 30s", solved);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
