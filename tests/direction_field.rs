use approx::assert_relative_eq;
use dirfield::{
    draw_direction_field, sample_field, Fallible, FieldError, FieldOptions, Pivot, PlotSurface,
    Quiver, System,
};
use ratatui::style::Color;

/// Surface with fixed limits that records every draw call.
struct Recorder {
    xlim: (f64, f64),
    ylim: (f64, f64),
    quivers: Vec<Quiver>,
}

impl Recorder {
    fn new(xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self {
            xlim,
            ylim,
            quivers: Vec::new(),
        }
    }

    fn only(&self) -> &Quiver {
        assert_eq!(self.quivers.len(), 1);
        &self.quivers[0]
    }
}

impl PlotSurface for Recorder {
    fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    fn quiver(&mut self, quiver: Quiver) -> dirfield::Result<()> {
        self.quivers.push(quiver);
        Ok(())
    }
}

fn oscillator(s: &[f64], _t: f64, _p: &()) -> Vec<f64> {
    vec![s[1], -s[0]]
}

fn uneven(s: &[f64], _t: f64, _p: &()) -> Vec<f64> {
    vec![s[0] * 3.0 + 1.0, s[1] - s[0] * 0.5]
}

fn scenario() -> FieldOptions {
    FieldOptions::new()
        .resolution(3, 3)
        .clip_negative(false)
        .scale_to_axes(false)
        .dynamic_range(1.0)
}

#[test]
fn shape_is_ny_by_nx() {
    let surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    for (nx, ny) in [(1, 1), (1, 4), (5, 2), (7, 7)] {
        let options = FieldOptions::new().resolution(nx, ny);
        let field = sample_field(&surface, &oscillator, &(), &options).unwrap();
        assert_eq!(field.shape(), (ny, nx));
        assert_eq!(field.u.dim(), (ny, nx));
        assert_eq!(field.v.dim(), (ny, nx));
        assert_eq!(field.y.dim(), (ny, nx));
    }
}

#[test]
fn harmonic_oscillator_scenario() {
    let mut surface = Recorder::new((-2.0, 2.0), (-2.0, 2.0));
    draw_direction_field(&mut surface, &oscillator, &(), &scenario()).unwrap();
    let field = &surface.only().field;

    let nodes: Vec<(f64, f64)> = field.nodes().map(|(x, y, _, _)| (x, y)).collect();
    assert_eq!(
        &nodes[..4],
        &[(-2.0, -2.0), (0.0, -2.0), (2.0, -2.0), (-2.0, 0.0)]
    );

    let at = |x: f64, y: f64| {
        field
            .nodes()
            .find(|&(nx, ny, _, _)| nx == x && ny == y)
            .map(|(_, _, u, v)| (u, v))
            .unwrap()
    };
    assert_eq!(at(2.0, 0.0), (0.0, -2.0));
    assert_eq!(at(0.0, 2.0), (2.0, 0.0));
}

#[test]
fn raw_components_survive_unit_dynamic_range() {
    let surface = Recorder::new((-3.0, 5.0), (1.0, 2.0));
    let field = sample_field(&surface, &uneven, &(), &scenario().resolution(4, 5)).unwrap();
    for (x, y, u, v) in field.nodes() {
        let expected = uneven(&[x, y], 0.0, &());
        assert_eq!((u, v), (expected[0], expected[1]));
    }
}

#[test]
fn normalised_vectors_have_unit_length() {
    let surface = Recorder::new((-3.0, 5.0), (-1.0, 20.0));
    let options = FieldOptions::new().resolution(6, 6).normalise(true);
    let field = sample_field(&surface, &uneven, &(), &options).unwrap();
    for (_, _, u, v) in field.nodes() {
        let len = u.hypot(v);
        if len != 0.0 {
            assert_relative_eq!(len, 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn normalised_scenario_node() {
    let surface = Recorder::new((-2.0, 2.0), (-2.0, 2.0));
    let options = FieldOptions {
        dynamic_range: None,
        ..scenario().normalise(true)
    };
    let field = sample_field(&surface, &oscillator, &(), &options).unwrap();
    // node (2, 0) is row 1, column 2; the origin stays a zero vector
    assert_relative_eq!(field.u[[1, 2]], 0.0);
    assert_relative_eq!(field.v[[1, 2]], -1.0);
    assert_eq!((field.u[[1, 1]], field.v[[1, 1]]), (0.0, 0.0));
}

#[test]
fn normalise_ignores_dynamic_range() {
    let surface = Recorder::new((-3.0, 5.0), (-1.0, 20.0));
    let plain = FieldOptions::new().resolution(5, 4).normalise(true);
    let conflicting = plain.clone().dynamic_range(0.5);
    let a = sample_field(&surface, &uneven, &(), &plain).unwrap();
    let b = sample_field(&surface, &uneven, &(), &conflicting).unwrap();
    assert_eq!(a, b);
}

#[test]
fn switch_axes_matches_explicit_indices() {
    let surface = Recorder::new((-1.0, 4.0), (-2.0, 3.0));
    let base = FieldOptions::new().resolution(4, 3).clip_negative(false);
    let switched = sample_field(&surface, &uneven, &(), &base.clone().switch_axes(true)).unwrap();
    let explicit = sample_field(&surface, &uneven, &(), &base.indices(1, 0)).unwrap();
    assert_eq!(switched, explicit);
}

#[test]
fn clip_negative_starts_sampling_at_zero() {
    let surface = Recorder::new((-5.0, 5.0), (2.0, 4.0));
    let field = sample_field(&surface, &oscillator, &(), &FieldOptions::new().resolution(3, 3)).unwrap();
    assert_eq!(field.x[[0, 0]], 0.0);
    assert_eq!(field.x[[0, 2]], 5.0);
    assert_eq!(field.y[[0, 0]], 2.0);

    let unclipped = FieldOptions::new().resolution(3, 3).clip_negative(false);
    let field = sample_field(&surface, &oscillator, &(), &unclipped).unwrap();
    assert_eq!(field.x[[0, 0]], -5.0);
}

#[test]
fn axis_scaling_uses_unclipped_spans() {
    let surface = Recorder::new((-5.0, 5.0), (0.0, 2.0));
    let constant = |_s: &[f64], _t: f64, _p: &()| vec![10.0, 1.0];
    let options = FieldOptions::new().resolution(2, 2);
    let field = sample_field(&surface, &constant, &(), &options).unwrap();
    assert!(field.u.iter().all(|&u| u == 1.0));
    assert!(field.v.iter().all(|&v| v == 0.5));
}

#[test]
fn draw_uses_centered_arrows_and_color() {
    let mut surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    let options = FieldOptions::new().resolution(2, 2).color(Color::Green);
    draw_direction_field(&mut surface, &oscillator, &(), &options).unwrap();
    let quiver = surface.only();
    assert_eq!(quiver.pivot, Pivot::Middle);
    assert_eq!(quiver.color, Color::Green);
}

#[test]
fn default_color_is_black() {
    assert_eq!(FieldOptions::default().color, Color::Black);
}

#[test]
fn caller_state_is_not_mutated() {
    let surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    let s0 = vec![0.25, 0.75, 3.0];
    let options = FieldOptions::new().resolution(2, 2).s0(s0.clone());
    let system_field = sample_field(&surface, &System::Harmonic, &[1.0][..], &options).unwrap();
    assert_eq!(options.s0, Some(s0));
    assert_eq!(system_field.shape(), (2, 2));
}

#[test]
fn third_slot_can_be_plotted() {
    let surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    let spiral = |s: &[f64], _t: f64, _p: &()| vec![s[0], 0.0, s[2] * 2.0];
    let options = scenario().indices(0, 2).s0(vec![0.0, 9.0, 0.0]).resolution(2, 2);
    let field = sample_field(&surface, &spiral, &(), &options).unwrap();
    assert_eq!(field.v[[1, 1]], 2.0);
    assert_eq!(field.u[[1, 1]], 1.0);
}

#[test]
fn default_state_rejects_third_slot() {
    let surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    let options = FieldOptions::new().indices(0, 2);
    assert!(matches!(
        sample_field(&surface, &oscillator, &(), &options),
        Err(FieldError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn derivative_errors_propagate_and_nothing_is_drawn() {
    let mut surface = Recorder::new((0.0, 1.0), (0.0, 1.0));
    let failing = Fallible(|s: &[f64], _t: f64, _p: &()| {
        if s[0] > 0.5 {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "overflow"))
        } else {
            Ok(vec![0.0, 0.0])
        }
    });
    let err = draw_direction_field(&mut surface, &failing, &(), &FieldOptions::new()).unwrap_err();
    assert!(matches!(err, FieldError::Derivative { .. }));
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "overflow");
    assert!(surface.quivers.is_empty());
}

#[test]
fn zero_axis_span_is_an_explicit_error() {
    let mut surface = Recorder::new((0.0, 1.0), (3.0, 3.0));
    let err = draw_direction_field(&mut surface, &oscillator, &(), &FieldOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "y axis has zero span, cannot scale vectors to axes");
    assert!(surface.quivers.is_empty());
}
