use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Mount a root component and render it to HTML
#[allow(dead_code)]
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Mount a root component with props and render it to HTML
#[allow(dead_code)]
pub fn render_with_props<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(app, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of elements carrying `data-testid="{test_id}"`
#[allow(dead_code)]
pub fn count_test_id(html: &str, test_id: &str) -> usize {
    html.matches(&format!("data-testid=\"{test_id}\"")).count()
}

/// A mounted `VirtualDom` that remembers the edits it has emitted, so tests
/// can find elements by their dynamic attributes and click them
#[allow(dead_code)]
pub struct MountedDom {
    pub dom: VirtualDom,
    edits: Vec<Mutation>,
}

#[allow(dead_code)]
impl MountedDom {
    pub fn new(app: fn() -> Element) -> Self {
        Self::mount(VirtualDom::new(app))
    }

    pub fn with_props<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> Self {
        Self::mount(VirtualDom::new_with_props(app, props))
    }

    fn mount(mut dom: VirtualDom) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let edits = dom.rebuild_to_vec().edits;
        Self { dom, edits }
    }

    /// Element whose attribute `name` was last set to `value`
    pub fn element_with(&self, name: &str, value: &str) -> Option<ElementId> {
        self.edits.iter().rev().find_map(|edit| match edit {
            Mutation::SetAttribute {
                name: attr,
                value: AttributeValue::Text(text),
                id,
                ..
            } if *attr == name && text == value => Some(*id),
            _ => None,
        })
    }

    /// Dispatch a click on the element carrying `name="value"` and apply
    /// whatever re-render it causes
    pub fn click(&mut self, name: &str, value: &str) {
        let Some(id) = self.element_with(name, value) else {
            panic!("no element with {name}=\"{value}\"");
        };
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, id);
        self.flush();
    }

    /// Run pending signal writes and re-render dirty scopes
    pub fn flush(&mut self) {
        let edits = self.dom.render_immediate_to_vec().edits;
        self.edits.extend(edits);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
