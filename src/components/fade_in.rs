use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that slides its children up into view the first time they scroll
/// into the viewport, then stays visible.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let revealed = Rc::new(Cell::new(false));

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if revealed.get() {
                        return;
                    }
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let rect = element.get_bounding_client_rect();
                        let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();
                        // Reveal once the top edge is 100px inside the viewport.
                        if rect.top() < viewport - 100.0 {
                            revealed.set(true);
                            visible.set(true);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                // Initial check for content already on screen
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
