// Chart description handed to the rendering shell.
//
// Serialises to a Plotly figure: `{ "data": [...], "layout": {...} }`.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<i64>>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            tickmode: None,
            tickvals: None,
        }
    }

    /// Axis showing a tick exactly at each of `tickvals`
    pub fn with_ticks(title: &str, tickvals: Vec<i64>) -> Self {
        Self {
            title: title.to_string(),
            tickmode: Some("array".to_string()),
            tickvals: Some(tickvals),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers")]
    Markers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    pub marker: MarkerStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_y: Option<ErrorBars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBars {
    #[serde(rename = "type")]
    pub kind: String,
    pub array: Vec<f64>,
    pub visible: bool,
}

impl ErrorBars {
    pub fn data(array: Vec<f64>) -> Self {
        Self {
            kind: "data".to_string(),
            array,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub marker: BarMarker,
}

/// One colour per bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<String>,
}

impl ScatterTrace {
    /// Line+marker series drawn in a single colour
    pub fn line(name: String, color: &str, x: Vec<i64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            mode: TraceMode::LinesMarkers,
            name: Some(name),
            line: Some(LineStyle {
                color: color.to_string(),
            }),
            marker: MarkerStyle {
                color: color.to_string(),
                size: None,
            },
            error_y: None,
            showlegend: None,
        }
    }
}

impl Trace {
    pub fn x(&self) -> &[i64] {
        match self {
            Trace::Scatter(t) => &t.x,
            Trace::Bar(t) => &t.x,
        }
    }
}

impl ChartSpec {
    pub fn new(layout: Layout, data: Vec<Trace>) -> Self {
        Self { data, layout }
    }

    /// True when no trace carries a single point
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|t| t.x().is_empty())
    }
}

#[cfg(test)]
impl ChartSpec {
    pub fn is_bar(&self) -> bool {
        matches!(self.data.as_slice(), [Trace::Bar(_)])
    }
}
