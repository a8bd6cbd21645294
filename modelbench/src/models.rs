use modelbench_core::{
    Axes, FieldValue, Figure, InteractiveModel, Item, ParamSet, View,
};

const SAMPLES: usize = 200;

/// y = a·x² + b·x + c over x ∈ [-10, 10], with its derivative alongside.
pub struct Quadratic {
    params: ParamSet,
}

impl Default for Quadratic {
    fn default() -> Self {
        Self {
            params: ParamSet::new()
                .with("a", FieldValue::Float(8.0))
                .with("b", FieldValue::Float(3.0))
                .with("c", FieldValue::Float(8.0)),
        }
    }
}

impl InteractiveModel for Quadratic {
    fn name(&self) -> &str {
        "Quadratic"
    }

    fn view(&self) -> View {
        View::new([
            Item::new("a").minmax(-10.0, 10.0),
            Item::new("b").minmax(-10.0, 10.0),
            Item::new("c").minmax(-10.0, 10.0),
        ])
    }

    fn update_plot(&self, axes: &mut [Axes]) {
        let a = self.params.float("a").unwrap_or(0.0);
        let b = self.params.float("b").unwrap_or(0.0);
        let c = self.params.float("c").unwrap_or(0.0);

        let Some(ax) = axes.first_mut() else { return };
        ax.set_title("y = a·x² + b·x + c");
        ax.set_xlabel("x");
        ax.show_grid(true);

        let mut y = Vec::with_capacity(SAMPLES);
        let mut dy = Vec::with_capacity(SAMPLES);
        for i in 0..SAMPLES {
            let x = -10.0 + 20.0 * i as f64 / (SAMPLES - 1) as f64;
            y.push([x, a * x * x + b * x + c]);
            dy.push([x, 2.0 * a * x + b]);
        }
        ax.line("y", y);
        ax.line("dy/dx", dy);
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.params.get(name)
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        self.params.set(name, value);
    }
}

/// Decaying sinusoid with its energy on a second axes. Exercises the int
/// slider, the toggle, and a multi-axes layout.
pub struct DampedOscillator {
    params: ParamSet,
}

impl Default for DampedOscillator {
    fn default() -> Self {
        Self {
            params: ParamSet::new()
                .with("amplitude", FieldValue::Float(1.0))
                .with("frequency", FieldValue::Float(2.0))
                .with("damping", FieldValue::Float(0.1))
                .with("cycles", FieldValue::Int(5))
                .with("show_envelope", FieldValue::Bool(true)),
        }
    }
}

impl InteractiveModel for DampedOscillator {
    fn name(&self) -> &str {
        "Damped oscillator"
    }

    fn view(&self) -> View {
        View::new([
            Item::new("amplitude").label("A").minmax(0.0, 2.0),
            Item::new("frequency").label("f [Hz]").minmax(0.1, 10.0),
            Item::new("damping").label("ζ").minmax(0.0, 1.0),
            Item::new("cycles").minmax(1.0, 20.0),
            Item::new("show_envelope").label("show envelope"),
        ])
    }

    fn subplots<'f>(&self, fig: &'f mut Figure) -> &'f mut [Axes] {
        fig.subplots(2, 1)
    }

    fn update_plot(&self, axes: &mut [Axes]) {
        let amplitude = self.params.float("amplitude").unwrap_or(1.0);
        let frequency = self.params.float("frequency").unwrap_or(1.0).max(1e-3);
        let damping = self.params.float("damping").unwrap_or(0.0);
        let cycles = self.params.int("cycles").unwrap_or(1).max(1);
        let show_envelope = self.params.flag("show_envelope").unwrap_or(false);

        let omega = std::f64::consts::TAU * frequency;
        let duration = cycles as f64 / frequency;

        let mut signal = Vec::with_capacity(SAMPLES);
        let mut upper = Vec::with_capacity(SAMPLES);
        let mut lower = Vec::with_capacity(SAMPLES);
        let mut energy = Vec::with_capacity(SAMPLES);
        for i in 0..SAMPLES {
            let t = duration * i as f64 / (SAMPLES - 1) as f64;
            let decay = amplitude * (-damping * omega * t).exp();
            signal.push([t, decay * (omega * t).sin()]);
            upper.push([t, decay]);
            lower.push([t, -decay]);
            energy.push([t, decay * decay]);
        }

        if let Some(ax) = axes.first_mut() {
            ax.set_title("displacement");
            ax.set_xlabel("t [s]");
            ax.line("x(t)", signal);
            if show_envelope {
                ax.line("envelope", upper);
                ax.line("-envelope", lower);
            }
        }
        if let Some(ax) = axes.get_mut(1) {
            ax.set_title("energy");
            ax.set_xlabel("t [s]");
            ax.line("E(t)", energy);
        }
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.params.get(name)
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        self.params.set(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_draws_value_and_derivative() {
        let model = Quadratic::default();
        let mut fig = Figure::default();
        model.update_plot(model.subplots(&mut fig));
        let ax = &fig.axes()[0];
        assert_eq!(ax.lines().len(), 2);
        // a=8, b=3, c=8 at x=-10: 800 - 30 + 8
        assert_eq!(ax.lines()[0].points[0], [-10.0, 778.0]);
    }

    #[test]
    fn oscillator_envelope_follows_toggle() {
        let mut model = DampedOscillator::default();
        let mut fig = Figure::default();
        model.update_plot(model.subplots(&mut fig));
        assert_eq!(fig.axes()[0].lines().len(), 3);

        model.set("show_envelope", FieldValue::Bool(false));
        let mut fig = Figure::default();
        model.update_plot(model.subplots(&mut fig));
        assert_eq!(fig.axes()[0].lines().len(), 1);
        assert_eq!(fig.axes().len(), 2);
    }

    #[test]
    fn oscillator_interacts_with_full_control_set() {
        let window = DampedOscillator::default().interact().unwrap();
        assert_eq!(window.tabs().len(), 1);
        assert_eq!(window.tabs()[0].title(), "Damped oscillator");
        assert_eq!(window.tabs()[0].controls().len(), 5);
    }
}
