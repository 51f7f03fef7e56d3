//! Floating ingredient particles behind the page.

use dioxus::prelude::*;

use crate::gate::Particle;

#[component]
pub fn ParticleLayer(particles: Vec<Particle>) -> Element {
    rsx! {
        div { class: "particles-container",
            {particles.into_iter().map(|particle| {
                let left = particle.left_fraction * 100.0;
                let seconds = particle.duration.as_secs_f64();
                rsx! {
                    div {
                        key: "{particle.id}",
                        class: "floating-ingredient",
                        style: "left: {left}%; font-size: {particle.size_px}px; animation-duration: {seconds}s",
                        "{particle.emoji}"
                    }
                }
            })}
        }
    }
}
