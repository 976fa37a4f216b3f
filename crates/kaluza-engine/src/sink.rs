//! The fire-and-forget visualization boundary.
//!
//! The core hands already-computed payloads to a [`VisualSink`] and never
//! depends on the outcome: no return value is consumed and a sink that goes
//! away mid-run must not abort the simulation loop. [`ChannelSink`] realizes
//! that isolation with a bounded non-blocking channel — payloads are
//! dropped when the consumer is full or gone.

use crossbeam_channel::{bounded, Receiver, Sender};
use kaluza_grid::{ComplexGrid, VectorGrid};
use kaluza_solvers::RadiusHistory;

/// A field sample with its rendering hints.
#[derive(Clone, Debug)]
pub struct FieldFrame {
    /// The complex field at snapshot time.
    pub field: ComplexGrid,
    /// Simulation time of the sample.
    pub time: f64,
    /// Energy at the sample.
    pub energy: f64,
    /// Plot title.
    pub title: String,
    /// Colormap name understood by the renderer.
    pub colormap: String,
    /// Axis index of the slice plane for volume rendering.
    pub slice_plane: usize,
}

/// Radius-evolution curves with their rendering hints.
#[derive(Clone, Debug)]
pub struct DimensionCurves {
    /// Radius history so far, indexed by step then dimension.
    pub history: RadiusHistory,
    /// Plot title.
    pub title: String,
    /// Logarithmic radius axis.
    pub y_log_scale: bool,
}

/// A vector-field sample with its rendering hints.
#[derive(Clone, Debug)]
pub struct VectorFrame {
    /// The projected gravitational field.
    pub field: VectorGrid,
    /// Plot title.
    pub title: String,
    /// Arrow scale factor.
    pub scale: f64,
    /// Whether to draw streamlines instead of arrows.
    pub stream_lines: bool,
}

/// A sampled effective-potential curve with its rendering hints.
#[derive(Clone, Debug)]
pub struct PotentialCurve {
    /// Sample distances, ascending.
    pub distances: Vec<f64>,
    /// Potential values at each distance.
    pub values: Vec<f64>,
    /// Plot title.
    pub title: String,
    /// Logarithmic value axis.
    pub log_scale: bool,
}

/// External visualization collaborator.
///
/// All methods are fire-and-forget: the core does not wait for rendering,
/// consumes no return value, and is unaffected by a collaborator that
/// drops payloads. Implementations must not panic into the simulation
/// loop.
pub trait VisualSink: Send {
    /// Render a field snapshot.
    fn visualize_field(&self, frame: FieldFrame);
    /// Plot the radius-evolution curves.
    fn plot_dimension_evolution(&self, curves: DimensionCurves);
    /// Render a vector-field snapshot.
    fn visualize_vectorfield(&self, frame: VectorFrame);
    /// Plot an effective-potential curve.
    fn plot_effective_potential(&self, curve: PotentialCurve);
}

/// A sink that discards every payload. The default collaborator.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn visualize_field(&self, _frame: FieldFrame) {}
    fn plot_dimension_evolution(&self, _curves: DimensionCurves) {}
    fn visualize_vectorfield(&self, _frame: VectorFrame) {}
    fn plot_effective_potential(&self, _curve: PotentialCurve) {}
}

/// Visualization payloads carried by a [`ChannelSink`].
#[derive(Clone, Debug)]
pub enum VisualEvent {
    /// From [`VisualSink::visualize_field`].
    Field(FieldFrame),
    /// From [`VisualSink::plot_dimension_evolution`].
    Dimensions(DimensionCurves),
    /// From [`VisualSink::visualize_vectorfield`].
    VectorField(VectorFrame),
    /// From [`VisualSink::plot_effective_potential`].
    Potential(PotentialCurve),
}

/// A sink that forwards payloads over a bounded channel without blocking.
///
/// `try_send` semantics: when the channel is full or the receiver has been
/// dropped, the payload is silently discarded — the consumer's state can
/// never stall or abort the simulation.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<VisualEvent>,
}

impl ChannelSink {
    /// Create a sink and its receiving end with room for `capacity`
    /// in-flight payloads.
    pub fn bounded(capacity: usize) -> (Self, Receiver<VisualEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }

    fn forward(&self, event: VisualEvent) {
        // Full or disconnected: drop the payload, never block or fail.
        let _ = self.tx.try_send(event);
    }
}

impl VisualSink for ChannelSink {
    fn visualize_field(&self, frame: FieldFrame) {
        self.forward(VisualEvent::Field(frame));
    }

    fn plot_dimension_evolution(&self, curves: DimensionCurves) {
        self.forward(VisualEvent::Dimensions(curves));
    }

    fn visualize_vectorfield(&self, frame: VectorFrame) {
        self.forward(VisualEvent::VectorField(frame));
    }

    fn plot_effective_potential(&self, curve: PotentialCurve) {
        self.forward(VisualEvent::Potential(curve));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaluza_grid::GridShape;

    fn frame() -> FieldFrame {
        FieldFrame {
            field: ComplexGrid::zeros(GridShape::cubic(2, 2, 1.0).unwrap()),
            time: 0.0,
            energy: 0.0,
            title: "t".to_string(),
            colormap: "viridis".to_string(),
            slice_plane: 0,
        }
    }

    #[test]
    fn channel_sink_delivers_in_order() {
        let (sink, rx) = ChannelSink::bounded(4);
        sink.visualize_field(frame());
        sink.plot_effective_potential(PotentialCurve {
            distances: vec![1.0],
            values: vec![2.0],
            title: "v".to_string(),
            log_scale: true,
        });
        assert!(matches!(rx.try_recv().unwrap(), VisualEvent::Field(_)));
        assert!(matches!(rx.try_recv().unwrap(), VisualEvent::Potential(_)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let (sink, rx) = ChannelSink::bounded(1);
        sink.visualize_field(frame());
        sink.visualize_field(frame());
        // One delivered, one dropped.
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn disconnected_receiver_is_harmless() {
        let (sink, rx) = ChannelSink::bounded(1);
        drop(rx);
        sink.visualize_field(frame());
        sink.visualize_vectorfield(VectorFrame {
            field: VectorGrid::zeros(GridShape::cubic(2, 2, 1.0).unwrap(), 2),
            title: "f".to_string(),
            scale: 1.0,
            stream_lines: false,
        });
    }
}
