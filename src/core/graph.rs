/// Owner of a lazily built, reusable output graph.
///
/// The first successful `get_or_try_init` builds the graph; later calls hand
/// back the same instance without calling `build`. A failed build leaves the
/// slot empty so a later call (typically the next user gesture) can try again.
/// `take` releases the graph for teardown.
#[derive(Debug)]
pub struct LazyGraph<G> {
    slot: Option<G>,
}

impl<G> Default for LazyGraph<G> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<G> LazyGraph<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_try_init<E>(
        &mut self,
        build: impl FnOnce() -> Result<G, E>,
    ) -> Result<&mut G, E> {
        let graph = match self.slot.take() {
            Some(g) => g,
            None => build()?,
        };
        Ok(self.slot.insert(graph))
    }

    pub fn get(&self) -> Option<&G> {
        self.slot.as_ref()
    }

    pub fn take(&mut self) -> Option<G> {
        self.slot.take()
    }
}
