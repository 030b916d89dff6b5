//! Glassfolio entry point
//!
//! Mounts the page in the browser and wires scroll tracking, reveals, the
//! contact form and the particle background together.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, PageTransitionEvent, ScrollBehavior, ScrollToOptions, Window};

    use glassfolio::MountError;
    use glassfolio::config::SiteConfig;
    use glassfolio::contact::{ContactForm, EmailJsRelay, Field, SubmitError, deliver};
    use glassfolio::content::SiteContent;
    use glassfolio::nav::{MobileMenu, ScrollCoalescer, ScrollTracker, SectionId, hero_parallax, scroll_target};
    use glassfolio::page::{self, PageView, RevealPlan, hero};
    use glassfolio::platform::{
        self, AnimationLoop, EventListener, ParticleFieldHandle, RevealObserver, boundary, observer,
    };
    use glassfolio::reveal::visible_fraction;
    use glassfolio::typewriter::Typewriter;

    /// Page state shared by the handlers
    struct Site {
        window: Window,
        config: SiteConfig,
        tracker: ScrollTracker,
        coalescer: ScrollCoalescer,
        menu: MobileMenu,
        reveals: RevealPlan,
        view: PageView,
        typewriter: Typewriter,
        last_time: f64,
        /// No IntersectionObserver: reveals are fed from scroll frames
        geometric_reveals: bool,
    }

    /// Everything registered with the browser. Dropping it detaches the page.
    #[derive(Default)]
    struct Mounted {
        listeners: Vec<EventListener>,
        observers: Vec<RevealObserver>,
        typing: Option<AnimationLoop>,
        background: Option<ParticleFieldHandle>,
    }

    type MountedSlot = Rc<RefCell<Option<Mounted>>>;

    impl Site {
        /// Apply every scroll signal received since the last frame
        fn flush_scroll(&mut self) {
            if self.coalescer.take() == 0 {
                return;
            }

            let sample = platform::scroll_sample(&self.window);
            let layout = self.view.layout(&self.window);
            let update = self.tracker.on_scroll(sample, &layout);

            self.view.nav.set_progress(update.percentage);
            if let Some(scrolled) = update.scrolled {
                self.view.nav.set_scrolled(scrolled);
            }
            if let Some(active) = update.active {
                log::debug!("Active section: {}", active.as_str());
                self.view.nav.set_active(active);
            }

            self.apply_parallax();
            if self.geometric_reveals {
                self.reveal_visible();
            }
        }

        fn apply_parallax(&self) {
            if self.reveals.is_reduced_motion() {
                return;
            }
            let parallax = hero_parallax(self.tracker.state().offset);
            let style = self.view.hero.parallax.style();
            let _ = style.set_property("transform", &format!("translateY({:.1}px)", parallax.translate_y));
            let _ = style.set_property("opacity", &format!("{:.3}", parallax.opacity));
        }

        /// Geometry-based reveal pass over the still hidden targets
        fn reveal_visible(&mut self) {
            if self.reveals.registry.all_revealed() {
                return;
            }
            let viewport = platform::viewport_rect(&self.window);
            let hidden: Vec<_> = self
                .reveals
                .groups()
                .iter()
                .filter(|g| !self.reveals.registry.is_revealed(g.id))
                .map(|g| (g.id, platform::element_rect(&g.root)))
                .collect();
            for (id, rect) in hidden {
                self.reveals.observe(id, visible_fraction(&rect, &viewport));
            }
        }

        /// Explicit navigation to a section
        fn go_to(&mut self, id: SectionId) {
            self.menu.choose(&mut self.tracker, id);
            self.view.nav.set_active(id);
            self.view.nav.set_menu_open(false);

            let Some(section) = self.view.section(id) else {
                return;
            };
            let top = platform::document_top(&self.window, section);
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(top, self.config.nav_link_offset));
            options.set_behavior(if self.reveals.is_reduced_motion() {
                ScrollBehavior::Instant
            } else {
                ScrollBehavior::Smooth
            });
            self.window.scroll_to_with_scroll_to_options(&options);
        }

        fn tick_typewriter(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 { time - self.last_time } else { 0.0 };
            self.last_time = time;
            if self.typewriter.advance(dt) {
                self.view.hero.typed.set_text_content(Some(&self.typewriter.text()));
            }
        }
    }

    pub fn run() {
        boundary::install_panic_hook();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Glassfolio starting...");
        boundary::guard(mount());
    }

    fn mount() -> Result<(), MountError> {
        let window = platform::window()?;
        let document = platform::document()?;

        let config = SiteConfig::load();
        let content = SiteContent::embedded()?;
        let prefers_reduced = platform::prefers_reduced_motion();
        let reduced_motion = config.effective_reduced_motion(prefers_reduced);

        let tracker = ScrollTracker::from_config(&config);
        let mut reveals = RevealPlan::new(reduced_motion);
        let year = js_sys::Date::new_0().get_full_year();
        let view = page::build(&document, &content, &config, &tracker, &mut reveals, year)?;

        let typewriter = Typewriter::new(content.hero.roles.as_slice(), content.hero.role_hold_ms);
        let geometric_reveals = !reduced_motion && !observer::is_supported();
        if geometric_reveals {
            log::info!("IntersectionObserver unavailable, revealing from scroll geometry");
        }

        let canvas = view.canvas.clone();
        let particle_count = config.particle_count(prefers_reduced);
        let relay = EmailJsRelay::new(config.relay.clone());

        let site = Rc::new(RefCell::new(Site {
            window: window.clone(),
            config,
            tracker,
            coalescer: ScrollCoalescer::default(),
            menu: MobileMenu::default(),
            reveals,
            view,
            typewriter,
            last_time: 0.0,
            geometric_reveals,
        }));

        let mut mounted = Mounted::default();

        if reduced_motion {
            let mut s = site.borrow_mut();
            s.reveals.reveal_all();
            let first = content.hero.roles.first().cloned().unwrap_or_default();
            s.view.hero.typed.set_text_content(Some(&first));
        } else {
            if !geometric_reveals {
                mounted.observers = setup_reveal_observers(&site)?;
            }
            mounted.typing = Some(setup_typewriter(site.clone())?);
        }

        mounted.listeners.extend(setup_scroll_handlers(&window, &site)?);
        mounted.listeners.extend(setup_navigation(&document, &site)?);
        mounted.listeners.extend(setup_mobile_menu(&site)?);
        mounted.listeners.push(setup_spotlight(&site)?);
        mounted.listeners.push(setup_contact_form(&site, relay)?);

        // Paint the initial scroll state (a reload can land mid-page)
        {
            let mut s = site.borrow_mut();
            s.coalescer.request();
            s.flush_scroll();
        }

        let mounted: MountedSlot = Rc::new(RefCell::new(Some(mounted)));
        setup_teardown(&window, mounted.clone())?;
        start_background(canvas, particle_count, Rc::downgrade(&mounted));

        log::info!("Glassfolio mounted");
        Ok(())
    }

    fn setup_reveal_observers(site: &Rc<RefCell<Site>>) -> Result<Vec<RevealObserver>, MountError> {
        let targets: Vec<_> = {
            let s = site.borrow();
            s.reveals
                .groups()
                .iter()
                .filter_map(|g| s.reveals.registry.get(g.id).map(|t| (g.id, g.root.clone(), t.threshold)))
                .collect()
        };

        targets
            .into_iter()
            .map(|(id, root, threshold)| {
                let site = site.clone();
                RevealObserver::new(&root, threshold, move |ratio| {
                    site.borrow_mut().reveals.observe(id, ratio)
                })
            })
            .collect()
    }

    fn setup_typewriter(site: Rc<RefCell<Site>>) -> Result<AnimationLoop, MountError> {
        AnimationLoop::start(move |time| site.borrow_mut().tick_typewriter(time))
    }

    fn setup_scroll_handlers(window: &Window, site: &Rc<RefCell<Site>>) -> Result<Vec<EventListener>, MountError> {
        let mut listeners = Vec::with_capacity(2);
        // Layout changes move section bounds just like scrolling does
        for event in ["scroll", "resize"] {
            let site = site.clone();
            let frame_window = window.clone();
            listeners.push(EventListener::passive(window, event, move |_| {
                let schedule = site.borrow_mut().coalescer.request();
                if !schedule {
                    return;
                }
                let frame_site = site.clone();
                if let Err(e) = platform::request_frame_once(&frame_window, move |_| {
                    frame_site.borrow_mut().flush_scroll();
                }) {
                    log::warn!("Frame request failed, updating scroll state now: {}", e);
                    site.borrow_mut().flush_scroll();
                }
            })?);
        }
        Ok(listeners)
    }

    fn setup_navigation(document: &web_sys::Document, site: &Rc<RefCell<Site>>) -> Result<Vec<EventListener>, MountError> {
        let links = site.borrow().view.section_links(document);
        links
            .into_iter()
            .map(|(id, link)| {
                let site = site.clone();
                EventListener::new(&link, "click", move |event| {
                    event.prevent_default();
                    site.borrow_mut().go_to(id);
                })
            })
            .collect()
    }

    fn setup_mobile_menu(site: &Rc<RefCell<Site>>) -> Result<Vec<EventListener>, MountError> {
        let (button, close, overlay) = {
            let s = site.borrow();
            (
                s.view.nav.menu_button.clone(),
                s.view.nav.close_button.clone(),
                s.view.nav.overlay.clone(),
            )
        };

        let mut listeners = Vec::with_capacity(3);
        {
            let site = site.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                let mut s = site.borrow_mut();
                let open = s.menu.toggle();
                s.view.nav.set_menu_open(open);
            })?);
        }
        for target in [close, overlay] {
            let site = site.clone();
            listeners.push(EventListener::new(&target, "click", move |_| {
                let mut s = site.borrow_mut();
                s.menu.close();
                let open = s.menu.is_open();
                s.view.nav.set_menu_open(open);
            })?);
        }
        Ok(listeners)
    }

    fn setup_spotlight(site: &Rc<RefCell<Site>>) -> Result<EventListener, MountError> {
        let card = site.borrow().view.hero.card.clone();
        let target = card.clone();
        EventListener::passive(&target, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            let (x, y) = hero::spotlight_position(&card, event.client_x() as f64, event.client_y() as f64);
            let style = card.style();
            let _ = style.set_property("--mouse-x", &format!("{:.1}%", x));
            let _ = style.set_property("--mouse-y", &format!("{:.1}%", y));
        })
    }

    fn setup_contact_form(site: &Rc<RefCell<Site>>, relay: EmailJsRelay) -> Result<EventListener, MountError> {
        let view = site.borrow().view.contact.clone();
        let form = Rc::new(RefCell::new(ContactForm::new()));
        let relay = Rc::new(relay);
        let target = view.form.clone();

        EventListener::new(&target, "submit", move |event| {
            event.prevent_default();

            let fields = view.read();
            let accepted = {
                let mut f = form.borrow_mut();
                for field in Field::ALL {
                    f.set(field, fields.get(field));
                }
                f.begin_submit()
            };

            match accepted {
                Ok(message) => {
                    view.render(&form.borrow());
                    let form = form.clone();
                    let relay = relay.clone();
                    let view = view.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        deliver(&form, &*relay, message).await;
                        view.render(&form.borrow());
                    });
                }
                Err(SubmitError::AlreadyPending) => log::debug!("Submission already in flight"),
                Err(SubmitError::Invalid(e)) => view.show_banner(&e.to_string(), false),
            }
        })
    }

    /// Detach everything when the page is discarded
    fn setup_teardown(window: &Window, mounted: MountedSlot) -> Result<(), MountError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            // Kept intact for the back/forward cache
            if event.persisted() {
                return;
            }
            let detached = mounted.borrow_mut().take();
            if let Some(m) = detached {
                log::info!(
                    "Detaching page: {} listeners, {} observers",
                    m.listeners.len(),
                    m.observers.len()
                );
            }
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_background(canvas: HtmlCanvasElement, count: usize, mounted: Weak<RefCell<Option<Mounted>>>) {
        if count == 0 {
            log::info!("Particle field disabled");
            return;
        }
        let seed = js_sys::Date::now() as u64;

        wasm_bindgen_futures::spawn_local(async move {
            match ParticleFieldHandle::start(canvas, count, seed).await {
                Ok(handle) => {
                    let Some(mounted) = mounted.upgrade() else { return };
                    let mut slot = mounted.borrow_mut();
                    match slot.as_mut() {
                        Some(m) => {
                            log::info!("Particle field attached ({} points)", handle.point_count());
                            m.background = Some(handle);
                        }
                        None => log::info!("Page detached before the particle field started"),
                    }
                }
                Err(e) => log::warn!("Particle field unavailable: {}", e),
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Glassfolio (native) starting...");
    log::info!("The site runs in the browser - build for wasm32 and serve index.html");

    let content = match glassfolio::SiteContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("Embedded content is invalid: {}", e);
            std::process::exit(1);
        }
    };
    let config = glassfolio::SiteConfig::load();

    println!("\n{} - {}", content.profile.name, content.hero.roles.join(" / "));
    println!(
        "{} skill categories, {} projects, {} particles at {} quality",
        content.skills.categories.len(),
        content.projects.items.len(),
        config.particle_count(false),
        config.quality.as_str()
    );

    println!("\nSimulating a scroll through the page...");
    simulate_scroll(&config);
}

/// Walk a synthetic layout and print what the navbar would show
#[cfg(not(target_arch = "wasm32"))]
fn simulate_scroll(config: &glassfolio::SiteConfig) {
    use glassfolio::nav::{ScrollSample, ScrollTracker, SectionBounds, SectionId};

    let layout: Vec<SectionBounds> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| SectionBounds::new(*id, i as f64 * 900.0, 900.0))
        .collect();
    let mut tracker = ScrollTracker::from_config(config);

    for offset in [0.0, 60.0, 850.0, 1900.0, 2700.0, 3600.0] {
        let update = tracker.on_scroll(ScrollSample::new(offset, 4500.0, 900.0), &layout);
        println!(
            "  offset {:>6.0}px  progress {:>5.1}%  active {:<8}  scrolled {}",
            offset,
            update.percentage,
            tracker.active().as_str(),
            tracker.state().past_threshold
        );
    }
}
