// Example: bind to the browser window and react to scrolling.
//
// Built for wasm32 this logs every scroll position and jumps back to the top once the page is
// scrolled past 2000px. On native targets there is no window, so the binding stays at (0, 0).
use window_scroll_web::{ScrollToOptions, use_window_scroll};

fn main() {
    let ws = use_window_scroll();
    let (pos, scroll_to) = ws.pair();
    println!("has_window={} initial={pos:?}", ws.has_surface());

    let sub = ws.on_change(move |p| {
        println!("scrolled to x={} y={}", p.x, p.y);
        if p.y > 2000.0 {
            scroll_to.scroll_to(ScrollToOptions::y(0.0));
        }
    });

    // A UI framework would hold these for the lifetime of the component.
    std::mem::forget(sub);
    std::mem::forget(ws);
}
