//! Arcade PD entry point
//!
//! Handles platform-specific initialization and wires the lobby or a content
//! page to the DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};

    use arcade_pd::anim::{CoinDropAnimation, Completion, PlayOutcome, Schedule};
    use arcade_pd::catalog::{DomainId, PageData};
    use arcade_pd::navigation::Navigation;
    use arcade_pd::platform::{KeyValueStore, LocalStorage, MemoryStorage, SystemClock};
    use arcade_pd::progress::ProgressPresenter;
    use arcade_pd::renderer::CanvasSurface;
    use arcade_pd::tuning::CoinTuning;
    use arcade_pd::ui::labels;
    use arcade_pd::ui::{Banner, BannerPhase};
    use arcade_pd::{ProgressStore, SettingKey};

    type Store = ProgressStore<Box<dyn KeyValueStore>, SystemClock>;

    /// Everything the page's event handlers share
    struct App {
        store: Store,
        nav: Navigation,
        animation: Option<CoinDropAnimation<CanvasSurface>>,
        banner: Banner,
    }

    type Shared = Rc<RefCell<App>>;

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn navigate(url: &str) {
        if let Some(window) = web_sys::window() {
            log::info!("Navigating to {}", url);
            let _ = window.location().set_href(url);
        }
    }

    fn viewport_size() -> Option<(f64, f64)> {
        let window = web_sys::window()?;
        let w = window.inner_width().ok()?.as_f64()?;
        let h = window.inner_height().ok()?.as_f64()?;
        Some((w, h))
    }

    fn open_store() -> Store {
        let storage: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                log::warn!("LocalStorage unavailable - progress will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        ProgressStore::new(storage, SystemClock)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Game Dev PD arcade starting...");

        let store = open_store();
        if let Err(e) = store.init() {
            log::warn!("Progress store init failed: {}", e);
        }

        let animation = CanvasSurface::from_element_id("animation-canvas")
            .map(|surface| CoinDropAnimation::new(surface, CoinTuning::default()));
        if animation.is_none() {
            log::warn!("Animation canvas not found");
        }

        let app = Rc::new(RefCell::new(App {
            store,
            nav: Navigation::default(),
            animation,
            banner: Banner::default(),
        }));

        setup_resize(app.clone());

        let document = web_sys::window().expect("no window").document().expect("no document");
        let is_lobby = matches!(document.query_selector(".arcade-lobby"), Ok(Some(_)));
        let is_domain_page = matches!(document.query_selector(".domain-page"), Ok(Some(_)));

        if is_lobby {
            init_lobby(app);
        } else if is_domain_page {
            init_domain_page(app);
        }
    }

    /// Wipe progress and start over (exposed for debugging)
    pub fn reset_progress() -> bool {
        match open_store().clear() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Progress reset failed: {}", e);
                false
            }
        }
    }

    // === Lobby ===

    fn init_lobby(app: Shared) {
        log::info!("Initializing arcade lobby");

        update_lobby_progress(&app.borrow());

        let visited = app
            .borrow()
            .store
            .get_setting(SettingKey::VisitedLobby)
            .unwrap_or(false);
        if !visited {
            show_first_visit_prompt(app.clone());
            if let Err(e) = app.borrow().store.set_setting(SettingKey::VisitedLobby, true) {
                log::warn!("Could not record lobby visit: {}", e);
            }
        }

        setup_cabinet_handlers(app);
    }

    fn for_each_element(selector: &str, mut f: impl FnMut(Element)) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(list) = document.query_selector_all(selector) else {
            return;
        };
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                f(el);
            }
        }
    }

    fn data_u32(el: &Element, attr: &str) -> Option<u32> {
        el.get_attribute(attr)?.parse().ok()
    }

    fn set_width(el: &Element, width: &str) {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("width", width);
        }
    }

    fn update_lobby_progress(app: &App) {
        let presenter = ProgressPresenter::new(&app.store);
        for_each_element(".cabinet-card", |card| {
            let (Some(domain), Some(total)) = (
                data_u32(&card, "data-domain-num"),
                data_u32(&card, "data-total-pages"),
            ) else {
                return;
            };
            let summary = presenter.cabinet_summary(DomainId(domain), total);

            if let Ok(Some(text)) = card.query_selector(".progress-text") {
                text.set_text_content(Some(&labels::cabinet_text(&summary)));
            }
            if let Ok(Some(fill)) = card.query_selector(".progress-fill") {
                set_width(&fill, &labels::fill_width(summary.percent));
            }
        });
    }

    fn show_first_visit_prompt(app: Shared) {
        let delay = app.borrow_mut().banner.show(now_ms());
        apply_banner(BannerPhase::Visible);
        schedule_banner(app, delay);
    }

    fn apply_banner(phase: BannerPhase) {
        let Some(prompt) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("first-visit-prompt"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = prompt.style();
        let _ = match phase {
            BannerPhase::Visible => style.set_property("display", "block"),
            BannerPhase::Fading => style.set_property("opacity", "0"),
            BannerPhase::Hidden => style.set_property("display", "none"),
        };
    }

    fn schedule_banner(app: Shared, delay_ms: f64) {
        set_timeout(delay_ms, move || {
            let next = {
                let mut a = app.borrow_mut();
                let next = a.banner.advance(now_ms());
                apply_banner(a.banner.phase());
                next
            };
            if let Some(delay) = next {
                schedule_banner(app, delay);
            }
        });
    }

    fn setup_cabinet_handlers(app: Shared) {
        for_each_element(".start-button", |button| {
            let Some(domain) = data_u32(&button, "data-domain") else {
                return;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                enter_domain(&app, DomainId(domain));
            });
            let _ = button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        });

        for_each_element(".cabinet-card", |card| {
            let Some(domain) = data_u32(&card, "data-domain-num") else {
                return;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                enter_domain(&app, DomainId(domain));
            });
            let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        });
    }

    /// Play the coin drop, then go to the domain's last visited page
    fn enter_domain(app: &Shared, domain: DomainId) {
        log::info!("Entering domain {}", domain);

        let (url, animate) = {
            let a = app.borrow();
            let page = ProgressPresenter::new(&a.store).resume_page(domain);
            let animate = a.animation.is_some()
                && a.store.get_setting(SettingKey::ShowAnimations).unwrap_or(true);
            (a.nav.domain_url(domain, page), animate)
        };

        if !animate {
            navigate(&url);
            return;
        }

        let done: Completion = Box::new(move || navigate(&url));
        let outcome = app
            .borrow_mut()
            .animation
            .as_mut()
            .map(|anim| anim.play(now_ms(), Some(done)));
        match outcome {
            Some(PlayOutcome::Started(next)) => schedule_animation(app.clone(), next),
            Some(PlayOutcome::AlreadyRunning) => log::debug!("Coin already dropping"),
            None => {}
        }
    }

    // === Animation driver ===

    fn advance_animation(app: &Shared, now: f64) -> Schedule {
        app.borrow_mut()
            .animation
            .as_mut()
            .map(|anim| anim.advance(now))
            .unwrap_or(Schedule::Idle)
    }

    fn schedule_animation(app: Shared, next: Schedule) {
        match next {
            Schedule::Frame => request_animation_frame(app),
            Schedule::Timer { delay_ms } => set_timeout(delay_ms, move || {
                let next = advance_animation(&app, now_ms());
                schedule_animation(app, next);
            }),
            Schedule::Idle => {}
        }
    }

    fn request_animation_frame(app: Shared) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            let next = advance_animation(&app, time);
            schedule_animation(app, next);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_timeout(delay_ms: f64, f: impl FnOnce() + 'static) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.ceil() as i32,
        );
        closure.forget();
    }

    fn setup_resize(app: Shared) {
        if let Some((w, h)) = viewport_size() {
            if let Some(anim) = app.borrow_mut().animation.as_mut() {
                anim.resize(w, h);
            }
        }

        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some((w, h)) = viewport_size() {
                if let Some(anim) = app.borrow_mut().animation.as_mut() {
                    anim.resize(w, h);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // === Content page ===

    /// `pageData` global set by the page template
    fn read_page_data() -> Option<PageData> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("pageData")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let json: String = js_sys::JSON::stringify(&value).ok()?.into();
        match serde_json::from_str(&json) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("Unreadable pageData: {}", e);
                None
            }
        }
    }

    fn init_domain_page(app: Shared) {
        log::info!("Initializing domain page");
        if let Some(page) = read_page_data() {
            handle_domain_page(&app, page);
        }
    }

    fn handle_domain_page(app: &Shared, page: PageData) {
        log::info!(
            "Domain {}, page {} of {}",
            page.domain_num,
            page.page_num,
            page.total_pages
        );

        let nav = {
            let a = app.borrow();
            if let Err(e) = a.store.mark_page_completed(page.domain_num, page.page_num) {
                log::warn!("Could not save progress: {}", e);
            }
            update_page_progress(&a, &page);
            a.nav.clone()
        };

        setup_keyboard_navigation(nav, page);
    }

    fn update_page_progress(app: &App, page: &PageData) {
        let percent = ProgressPresenter::new(&app.store).page_progress(page.page_num, page.total_pages);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(fill)) = document.query_selector(".progress-bar-fill") {
            set_width(&fill, &labels::fill_width(percent));
        }
        if let Ok(Some(text)) = document.query_selector(".progress-text") {
            text.set_text_content(Some(&labels::page_text(page.page_num, page.total_pages)));
        }
    }

    fn setup_keyboard_navigation(nav: Navigation, page: PageData) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(intent) = nav.key_name_intent(&event.key(), &page) {
                if intent.prevent_default {
                    event.prevent_default();
                }
                navigate(&intent.url);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn reset_progress() -> bool {
    wasm_app::reset_progress()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arcade PD (native) starting...");
    log::info!("The front end runs in the browser - build for wasm32 and serve with the site");

    lobby_summary();
    coin_drop_dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Log what a fresh client would see in the lobby
#[cfg(not(target_arch = "wasm32"))]
fn lobby_summary() {
    use arcade_pd::catalog::DOMAINS;
    use arcade_pd::platform::{MemoryStorage, SystemClock};
    use arcade_pd::ui::labels;
    use arcade_pd::{ProgressPresenter, ProgressStore};

    let store = ProgressStore::new(MemoryStorage::new(), SystemClock);
    if let Err(e) = store.init() {
        log::error!("Store init failed: {}", e);
        return;
    }

    let presenter = ProgressPresenter::new(&store);
    for domain in DOMAINS.iter() {
        let summary = presenter.cabinet_summary(domain.id, domain.total_pages);
        log::info!(
            "Domain {} - {}: {} ({}%)",
            domain.id,
            domain.title,
            labels::cabinet_text(&summary),
            summary.percent
        );
    }
}

/// Run the coin drop against a recording surface with virtual time
#[cfg(not(target_arch = "wasm32"))]
fn coin_drop_dry_run() {
    use arcade_pd::anim::{CoinDropAnimation, Completion, PlayOutcome, RecordingSurface, Schedule};
    use arcade_pd::tuning::CoinTuning;

    let mut anim = CoinDropAnimation::new(RecordingSurface::new(1280.0, 720.0), CoinTuning::default());
    let done: Completion = Box::new(|| log::info!("Coin drop complete"));
    let PlayOutcome::Started(mut next) = anim.play(0.0, Some(done)) else {
        return;
    };

    let mut now = 0.0;
    loop {
        match next {
            Schedule::Frame => now += 1000.0 / 60.0,
            Schedule::Timer { delay_ms } => now += delay_ms,
            Schedule::Idle => break,
        }
        next = anim.advance(now);
    }
    log::info!(
        "Coin drop: {} frames, {:.0} ms",
        anim.surface().draw_count(),
        now
    );
}
