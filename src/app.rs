use crate::{
    config::Config,
    presenter,
    sampler::Sampler,
    surface::{Event, EventSource, Surface},
};
use log::{info, trace};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Quit,
}

/// Single-threaded frame loop: drain input, rebuild the buffer, blit, present.
pub struct App<'a, D> {
    config : &'a Config,
    display: D,
    frames : u64,
}

impl<'a, D: Surface + EventSource> App<'a, D> {
    pub fn new(config: &'a Config, display: D) -> Self {
        Self { config, display, frames: 0 }
    }

    pub fn frames(&self) -> u64 { self.frames }
    pub fn display(&self) -> &D { &self.display }

    /// One iteration. A quit seen while draining input still lets this frame
    /// finish; the caller stops on the returned `Tick::Quit`.
    pub fn tick(&mut self) -> Tick {
        let mut next = Tick::Continue;
        while let Some(event) = self.display.poll_event() {
            match event {
                Event::Quit => next = Tick::Quit,
            }
        }

        let start = Instant::now();
        self.display.set_draw_color(self.config.background_color());
        self.display.clear();

        // rebuilt every frame, nothing is cached
        let buf = Sampler::new(self.config).render();
        presenter::blit(&buf, &mut self.display);
        self.display.present();

        self.frames += 1;
        trace!("frame {} in {:?}", self.frames, start.elapsed());
        next
    }

    pub fn run(&mut self) {
        while self.tick() == Tick::Continue {}
        info!("quit after {} frames", self.frames);
    }

    pub fn into_display(self) -> D { self.display }
}
