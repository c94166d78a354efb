// Example: a headless adapter that owns the "window" and drives the binding.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use window_scroll::{
    ListenerId, ScrollListener, ScrollRequest, ScrollSurface, ScrollToOptions, WindowScroll,
};

#[derive(Default)]
struct SimWindow {
    offset: Cell<(f64, f64)>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    next_id: Cell<u64>,
}

impl SimWindow {
    fn user_scroll(&self, x: f64, y: f64) {
        self.offset.set((x, y));
        for (_, l) in self.listeners.borrow_mut().iter_mut() {
            l();
        }
    }
}

impl ScrollSurface for SimWindow {
    fn scroll_x(&self) -> Option<f64> {
        Some(self.offset.get().0)
    }

    fn scroll_y(&self) -> Option<f64> {
        Some(self.offset.get().1)
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> Option<ListenerId> {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        Some(id)
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        listeners.len() != before
    }

    fn scroll_to(&self, request: ScrollRequest) {
        // A real window would animate; the simulation jumps and notifies.
        println!("platform scroll_to {request:?}");
        self.user_scroll(request.left, request.top);
    }
}

fn main() {
    let win = Rc::new(SimWindow::default());
    let ws = WindowScroll::from_shared(Some(Rc::clone(&win)), Default::default());

    let _sub = ws.on_change(|p| println!("render: x={} y={}", p.x, p.y));

    win.user_scroll(0.0, 120.0);

    let (pos, scroll_to) = ws.pair();
    println!("snapshot={pos:?}");
    scroll_to.scroll_to(ScrollToOptions::y(480.0));
    scroll_to.scroll_to_top();

    drop(ws);
    println!("listeners after drop={}", win.listeners.borrow().len());
}
