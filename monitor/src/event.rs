pub enum Event {
    Input(termion::event::Event),
    Resize,
}
