//! Tick engine: one synchronous ascending-index sweep over the population.
//!
//! The sweep runs as four consecutive sub-loops, one per class range, so the
//! per-neuron class never has to be recomputed. Each neuron gets the common
//! decay first, then its class rule:
//! - excitor: fires while it owes pulses and its timer has reached the
//!   threshold; releases +2 charge to every target
//! - inhibitor: same gate, releases -1 charge to every target
//! - pacemaker: fires on the timer alone
//! - sensor: drive decays, the sense hook runs, then it fires only while
//!   drive is strictly positive
//!
//! Ordering is part of the contract: target writes land mid-sweep, so later
//! neurons observe earlier neurons' effects within the same tick.

use crate::population::Population;
use crate::senses::{NoSenses, SenseSource};

impl Population {
    /// Advance the simulation by one tick with no sensory input.
    pub fn tick(&mut self) {
        self.tick_with(&mut NoSenses);
    }

    /// Advance the simulation by one tick, letting `senses` replenish each
    /// sensor neuron's drive before its firing check.
    pub fn tick_with<S: SenseSource + ?Sized>(&mut self, senses: &mut S) {
        let excitor_end = self.config.excitor_count() as usize;
        let inhibitor_end = self.config.basic_count() as usize;
        let pacemaker_end = inhibitor_end + self.config.pacemaker_count as usize;
        let sensor_end = self.config.neuron_count as usize;

        for i in 0..excitor_end {
            self.decay(i);
            self.try_fire_excitor(i);
        }
        for i in excitor_end..inhibitor_end {
            self.decay(i);
            self.try_fire_inhibitor(i);
        }
        for i in inhibitor_end..pacemaker_end {
            self.decay(i);
            self.try_fire_pacemaker(i);
        }
        for i in pacemaker_end..sensor_end {
            self.decay(i);
            let n = &mut self.neurons[i];
            // Sensory drive decays every tick unless replenished.
            n.input_strength = n.input_strength.saturating_sub(1);
            senses.replenish(i as u32, n);
            self.try_fire_sensor(i);
        }
    }

    /// Common per-tick decay, applied to every neuron before its class rule.
    fn decay(&mut self, i: usize) {
        let n = &mut self.neurons[i];
        n.pulse_freshness = n.pulse_freshness.saturating_sub(8);
        n.pulse_timer = n.pulse_timer.saturating_sub(1);
        n.charge = n.charge.saturating_sub(1);
    }

    /// Excitatory release: +2 charge to every target. A target pushed to 255
    /// gains a pulse and its charge resets to zero.
    fn excite(&mut self, i: usize) {
        for slot in 0..self.neurons[i].targets.len() {
            let t = self.neurons[i].targets[slot] as usize;
            let target = &mut self.neurons[t];
            target.charge = target.charge.saturating_add(2);
            if target.charge == 255 {
                target.pulse_counter = target.pulse_counter.saturating_add(1);
                target.charge = 0;
            }
        }
        self.neurons[i].pulse_freshness = 255;
    }

    /// Inhibitory release: -1 charge to every target, no pulse side effect.
    fn inhibit(&mut self, i: usize) {
        for slot in 0..self.neurons[i].targets.len() {
            let t = self.neurons[i].targets[slot] as usize;
            let target = &mut self.neurons[t];
            target.charge = target.charge.saturating_sub(1);
        }
        self.neurons[i].pulse_freshness = 255;
    }

    fn try_fire_excitor(&mut self, i: usize) {
        let n = &self.neurons[i];
        if n.pulse_counter > 0 && n.pulse_timer <= n.input_strength {
            self.excite(i);
            let n = &mut self.neurons[i];
            n.pulse_counter = n.pulse_counter.saturating_sub(1);
            n.pulse_timer = 255;
        }
    }

    fn try_fire_inhibitor(&mut self, i: usize) {
        let n = &self.neurons[i];
        if n.pulse_counter > 0 && n.pulse_timer <= n.input_strength {
            self.inhibit(i);
            let n = &mut self.neurons[i];
            n.pulse_counter = n.pulse_counter.saturating_sub(1);
            n.pulse_timer = 255;
        }
    }

    /// Pacemakers are autonomous oscillators: the timer alone gates firing.
    /// The pulse_counter decrement always lands on 0; kept so the fire path
    /// matches the excitor's.
    fn try_fire_pacemaker(&mut self, i: usize) {
        let n = &self.neurons[i];
        if n.pulse_timer <= n.input_strength {
            self.excite(i);
            let n = &mut self.neurons[i];
            n.pulse_counter = n.pulse_counter.saturating_sub(1);
            n.pulse_timer = 255;
        }
    }

    /// Sensors never fire while undriven: the gate additionally requires
    /// strictly positive drive, and no pulse is consumed.
    fn try_fire_sensor(&mut self, i: usize) {
        let n = &self.neurons[i];
        if n.input_strength > 0 && n.pulse_timer <= n.input_strength {
            self.excite(i);
            self.neurons[i].pulse_timer = 255;
        }
    }
}
