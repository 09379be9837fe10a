/// Which top-level view is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Cake,
}

/// The view that belongs with the mount state. Whenever the cake is not
/// mounted the landing view must be visible, otherwise nothing on the page
/// can bring it back.
#[inline]
pub fn view_for(mounted: bool) -> View {
    if mounted {
        View::Cake
    } else {
        View::Home
    }
}

/// Whether `pagehide` should tear the cake down. A page entering the
/// back/forward cache keeps its state and resumes as it was on `pageshow`.
#[inline]
pub fn pagehide_tears_down(persisted: bool) -> bool {
    !persisted
}
