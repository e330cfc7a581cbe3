//! Hangman entry point
//!
//! Browser builds wire the DOM to the game; native builds run the terminal
//! front end.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

    use hangman::platform::{KeyValueStore, LocalStore, MemoryStore};
    use hangman::ui::View;
    use hangman::{Action, App, Settings};

    type SharedApp = Rc<RefCell<App<Box<dyn KeyValueStore>>>>;

    /// Static page skeleton; dynamic parts are filled in by `render`
    const PAGE: &str = r#"
<header class="header">
  <div class="headerRow">
    <div>
      <h1>Hangman</h1>
      <p class="sub" id="header-text"></p>
    </div>
    <button class="btn" id="toggle-panel" title="Toggle word editor"></button>
  </div>
</header>
<section class="card wordsCard" id="word-panel">
  <div class="wordsHeader">
    <h2 class="h2">Word</h2>
    <div class="muted">Saved locally in your browser</div>
  </div>
  <div class="wordsControls">
    <input class="input" id="word-input" placeholder="Enter the word (letters only)" />
    <button class="btn" id="submit-word"></button>
    <button class="btn danger" id="clear-word">Clear</button>
  </div>
  <div class="wordsFooter">
    <div class="muted" id="current-word"></div>
    <button class="btn" id="reset-panel">Reset Game</button>
  </div>
</section>
<main class="card">
  <section class="top">
    <div class="figure" aria-label="hangman figure">
      <div class="gallows">
        <div class="beam"></div>
        <div class="rope"></div>
        <div class="post"></div>
        <div class="base"></div>
      </div>
      <div class="person" id="person"></div>
    </div>
    <div class="status">
      <div class="word" id="slots"></div>
      <div class="meta">
        <div id="wrong-line"></div>
        <div class="guessed" id="guessed-line"></div>
      </div>
      <div class="banner" id="banner"></div>
      <div class="actions">
        <button class="btn" id="reset-round">New Game (same word)</button>
      </div>
    </div>
  </section>
  <section class="keyboard" id="keyboard"></section>
</main>
<footer class="footer"><span class="muted">Tip: use your keyboard</span></footer>
"#;

    /// LocalStorage, or a throwaway store when the browser refuses it
    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({}), word will not be saved", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Hangman starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(root) = document.get_element_by_id("app") else {
            log::error!("Missing #app element");
            return;
        };

        root.set_inner_html(PAGE);
        if let Err(e) = build_keyboard(&document) {
            log::error!("Failed to build keyboard: {:?}", e);
            return;
        }

        let app: SharedApp = Rc::new(RefCell::new(App::new(open_store(), Settings::default())));

        setup_word_panel(&document, app.clone());
        setup_buttons(&document, app.clone());
        setup_keyboard_handlers(&document, app.clone());

        render(&document, &app.borrow().view());
        log::info!("Hangman running!");
    }

    /// One button per letter, ids `key-A` .. `key-Z`
    fn build_keyboard(document: &Document) -> Result<(), JsValue> {
        let keyboard = document
            .get_element_by_id("keyboard")
            .ok_or_else(|| JsValue::from_str("missing #keyboard"))?;
        for letter in hangman::consts::ALPHABET.chars() {
            let button = document.create_element("button")?;
            button.set_id(&format!("key-{}", letter));
            button.set_class_name("key");
            button.set_text_content(Some(&letter.to_string()));
            keyboard.append_child(&button)?;
        }
        Ok(())
    }

    /// Apply an action and redraw
    fn apply(document: &Document, app: &SharedApp, action: Action) {
        app.borrow_mut().dispatch(action);
        render(document, &app.borrow().view());
    }

    fn on_click(document: &Document, id: &str, app: SharedApp, action: Action) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            apply(&doc, &app, action.clone());
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, app: SharedApp) {
        on_click(document, "toggle-panel", app.clone(), Action::TogglePanel);
        on_click(document, "submit-word", app.clone(), Action::SubmitDraft);
        on_click(document, "clear-word", app.clone(), Action::ClearWord);
        on_click(document, "reset-panel", app.clone(), Action::ResetRound);
        on_click(document, "reset-round", app.clone(), Action::ResetRound);
        for letter in hangman::consts::ALPHABET.chars() {
            on_click(document, &format!("key-{}", letter), app.clone(), Action::GuessLetter(letter));
        }
    }

    fn setup_word_panel(document: &Document, app: SharedApp) {
        let Some(input) = document
            .get_element_by_id("word-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            log::warn!("Missing #word-input");
            return;
        };

        // Draft text
        {
            let app = app.clone();
            let doc = document.clone();
            let field = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                apply(&doc, &app, Action::EditDraft(field.value()));
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter submits
        {
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    apply(&doc, &app, Action::SubmitDraft);
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard_handlers(document: &Document, app: SharedApp) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Typing into the word editor is not a guess
            let in_editor = event
                .target()
                .is_some_and(|t| t.dyn_ref::<HtmlInputElement>().is_some());
            if in_editor || event.ctrl_key() || event.meta_key() || event.alt_key() {
                return;
            }
            apply(&doc, &app, Action::KeyPress(event.key()));
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_disabled(document: &Document, id: &str, disabled: bool) {
        if let Some(button) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(disabled);
        }
    }

    /// Replace an element's children with `<tag class=..>text</tag>` items
    fn fill(document: &Document, parent: &Element, tag: &str, items: &[(String, String)]) {
        parent.set_inner_html("");
        for (class, text) in items {
            if let Ok(child) = document.create_element(tag) {
                child.set_class_name(class);
                child.set_text_content(Some(text));
                let _ = parent.append_child(&child);
            }
        }
    }

    fn render(document: &Document, view: &View) {
        set_text(document, "header-text", &view.header);

        // Word panel
        set_text(document, "toggle-panel", view.panel.toggle_label);
        if let Some(panel) = document.get_element_by_id("word-panel") {
            let _ = panel.class_list().toggle_with_force("hidden", !view.panel.visible);
        }
        if let Some(input) = document
            .get_element_by_id("word-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            if input.value() != view.panel.draft {
                input.set_value(&view.panel.draft);
            }
        }
        set_text(document, "submit-word", view.panel.submit_label);
        set_text(document, "current-word", &view.panel.current);
        set_disabled(document, "clear-word", !view.panel.actions_enabled);
        set_disabled(document, "reset-panel", !view.panel.actions_enabled);
        set_disabled(document, "reset-round", !view.reset_enabled);

        // Status
        if let Some(slots) = document.get_element_by_id("slots") {
            let items: Vec<(String, String)> = view
                .slots
                .iter()
                .map(|c| ("slot".to_string(), c.to_string()))
                .collect();
            fill(document, &slots, "span", &items);
        }
        set_text(document, "wrong-line", &view.wrong_line);
        set_text(document, "guessed-line", &view.guessed_line);
        if let Some(banner) = document.get_element_by_id("banner") {
            let items: Vec<(String, String)> = view
                .banner
                .iter()
                .map(|b| (b.css_class().to_string(), b.text()))
                .collect();
            fill(document, &banner, "div", &items);
        }

        // Figure
        if let Some(person) = document.get_element_by_id("person") {
            let items: Vec<(String, String)> = view
                .figure
                .iter()
                .map(|part| (part.css_class().to_string(), String::new()))
                .collect();
            fill(document, &person, "div", &items);
        }

        // Keyboard
        for key in &view.keys {
            let id = format!("key-{}", key.letter);
            if let Some(el) = document.get_element_by_id(&id) {
                el.set_class_name(&key.css_class());
            }
            set_disabled(document, &id, key.disabled);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hangman::platform::FileStore;
    use hangman::{App, Settings};

    env_logger::init();
    let settings = Settings::from_env();
    let dir = settings.resolved_data_dir();
    log::info!("Hangman (native) starting, word stored in {}", dir.display());

    let mut app = App::new(FileStore::in_dir(&dir), settings);
    let stdin = std::io::stdin();
    if let Err(e) = hangman::console::run(&mut app, stdin.lock(), std::io::stdout()) {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
