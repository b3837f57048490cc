use egui::Pos2;

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotateEvent {
    /// A click was dispatched; `hits` lists the shapes that contained it
    Clicked {
        position: Pos2,
        hits: Vec<usize>,
    },
    Redrawn {
        shapes: usize,
    },
    RedrawSkipped,
    BackgroundLoaded {
        width: usize,
        height: usize,
    },
}
