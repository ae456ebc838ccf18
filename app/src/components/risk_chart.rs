//! Bar chart of the canned risk assessment, rendered through ECharts.
//!
//! Lifecycle follows the usual ECharts interop: init on mount, setOption
//! once (the data never changes), dispose when the panel leaves the
//! Simulated state.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local as spawn;

use riskly_types::{RISK_ROWS, RiskRow};

const CHART_ELEMENT_ID: &str = "risk-bar-chart";

// ─────────────────────────────────────────────────────────────────────────────
// ECharts JS Interop
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

fn init_chart(element_id: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // The ECharts script comes from a CDN; skip quietly if it has not
    // loaded yet instead of throwing from the extern shim.
    let echarts = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("echarts")).ok()?;
    if echarts.is_null() || echarts.is_undefined() {
        warn!("echarts global not present, skipping chart render");
        return None;
    }

    let element = document.get_element_by_id(element_id)?;

    // Check if an instance already exists
    let existing = echarts_get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }

    Some(echarts_init(&element))
}

fn set_chart_option(chart: &JsValue, option: &JsValue) {
    let set_option = js_sys::Reflect::get(chart, &JsValue::from_str("setOption"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = set_option {
        let _ = func.call1(chart, option);
    }
}

fn resize_chart(chart: &JsValue) {
    let resize = js_sys::Reflect::get(chart, &JsValue::from_str("resize"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = resize {
        let _ = func.call0(chart);
    }
}

fn dispose_chart(element_id: &str) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(element_id)
    {
        let instance = echarts_get_instance(&element);
        if !instance.is_null() && !instance.is_undefined() {
            let dispose = js_sys::Reflect::get(&instance, &JsValue::from_str("dispose"))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
            if let Some(func) = dispose {
                let _ = func.call0(&instance);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart Option
// ─────────────────────────────────────────────────────────────────────────────

/// Minimal ECharts option payload, converted with serde-wasm-bindgen.
#[derive(Serialize)]
struct BarOption {
    tooltip: Tooltip,
    grid: Grid,
    #[serde(rename = "xAxis")]
    x_axis: Axis,
    #[serde(rename = "yAxis")]
    y_axis: Axis,
    series: Vec<Series>,
    animation: bool,
}

#[derive(Serialize)]
struct Tooltip {
    trigger: &'static str,
}

#[derive(Serialize)]
struct Grid {
    left: &'static str,
    right: &'static str,
    top: &'static str,
    bottom: &'static str,
    #[serde(rename = "containLabel")]
    contain_label: bool,
}

#[derive(Serialize)]
struct Axis {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<u8>,
    #[serde(rename = "axisLabel")]
    axis_label: LabelStyle,
    #[serde(rename = "splitLine", skip_serializing_if = "Option::is_none")]
    split_line: Option<SplitLine>,
}

#[derive(Serialize)]
struct LabelStyle {
    color: &'static str,
}

#[derive(Serialize)]
struct SplitLine {
    #[serde(rename = "lineStyle")]
    line_style: LineStyle,
}

#[derive(Serialize)]
struct LineStyle {
    color: &'static str,
}

#[derive(Serialize)]
struct Series {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "barWidth")]
    bar_width: &'static str,
    data: Vec<BarDatum>,
}

#[derive(Serialize)]
struct BarDatum {
    value: u8,
    #[serde(rename = "itemStyle")]
    item_style: ItemStyle,
}

#[derive(Serialize)]
struct ItemStyle {
    color: &'static str,
    #[serde(rename = "borderRadius")]
    border_radius: u8,
}

/// Build the bar option: one bar per category, colored by status.
fn build_bar_option(rows: &[RiskRow]) -> BarOption {
    BarOption {
        tooltip: Tooltip { trigger: "item" },
        grid: Grid {
            left: "3%",
            right: "3%",
            top: "6%",
            bottom: "3%",
            contain_label: true,
        },
        x_axis: Axis {
            kind: "category",
            data: Some(rows.iter().map(|r| r.category).collect()),
            max: None,
            axis_label: LabelStyle { color: "#ccc" },
            split_line: None,
        },
        y_axis: Axis {
            kind: "value",
            data: None,
            max: Some(100),
            axis_label: LabelStyle { color: "#ccc" },
            split_line: Some(SplitLine {
                line_style: LineStyle { color: "#333" },
            }),
        },
        series: vec![Series {
            kind: "bar",
            bar_width: "55%",
            data: rows
                .iter()
                .map(|r| BarDatum {
                    value: r.score,
                    item_style: ItemStyle {
                        color: r.status.color(),
                        border_radius: 4,
                    },
                })
                .collect(),
        }],
        animation: false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn RiskChart() -> Element {
    use_effect(|| {
        spawn(async move {
            // Small delay to ensure DOM is ready
            TimeoutFuture::new(100).await;

            if let Some(chart) = init_chart(CHART_ELEMENT_ID) {
                let option = serde_wasm_bindgen::to_value(&build_bar_option(&RISK_ROWS))
                    .unwrap_or(JsValue::NULL);
                set_chart_option(&chart, &option);
                resize_chart(&chart);
            }
        });
    });

    // Window resize listener so the chart tracks its container width
    use_effect(|| {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window()
                && let Some(document) = window.document()
                && let Some(element) = document.get_element_by_id(CHART_ELEMENT_ID)
            {
                let instance = echarts_get_instance(&element);
                if !instance.is_null() && !instance.is_undefined() {
                    resize_chart(&instance);
                }
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    });

    use_drop(|| dispose_chart(CHART_ELEMENT_ID));

    rsx! {
        div { id: CHART_ELEMENT_ID, class: "risk-chart" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskly_types::RiskStatus;

    #[test]
    fn option_mirrors_the_constant_rows() {
        let option = build_bar_option(&RISK_ROWS);

        let categories = option.x_axis.data.as_ref().expect("category axis data");
        assert_eq!(
            categories,
            &vec!["Fraud", "Compliance", "Operational", "Liquidity", "Market"]
        );

        let series = &option.series[0];
        let scores: Vec<u8> = series.data.iter().map(|d| d.value).collect();
        assert_eq!(scores, vec![92, 45, 20, 35, 88]);
    }

    #[test]
    fn bars_are_colored_by_status() {
        let option = build_bar_option(&RISK_ROWS);
        for (datum, row) in option.series[0].data.iter().zip(RISK_ROWS.iter()) {
            assert_eq!(datum.item_style.color, row.status.color());
        }
        assert_eq!(
            option.series[0].data[0].item_style.color,
            RiskStatus::Critical.color()
        );
    }

    #[test]
    fn value_axis_tops_out_at_one_hundred() {
        let option = build_bar_option(&RISK_ROWS);
        assert_eq!(option.y_axis.max, Some(100));
        assert!(option.y_axis.data.is_none());
    }
}
