//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the filtered
//! transactions:
//! - **Inflow and Outflow by State**: stacked bar chart of deposits and withdrawals per state
//! - **Monthly Totals**: line chart of the amount moved each month
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, ItemStyle,
        JsFunction, Tooltip, Trigger,
    },
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    dashboard::aggregation::{MonthlyTotal, StateBreakdown},
    html::HeadElement,
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const DEPOSIT_COLOR: &str = "#10b981";
const WITHDRAW_COLOR: &str = "#f43f5e";
const LINE_COLOR: &str = "#3b82f6";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build the charts shown on the dashboard from the aggregated data.
pub(super) fn build_dashboard_charts(
    breakdown: &[StateBreakdown],
    monthly: &[MonthlyTotal],
) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "state-breakdown-chart",
            options: state_breakdown_chart(breakdown).to_string(),
        },
        DashboardChart {
            id: "monthly-totals-chart",
            options: monthly_totals_chart(monthly).to_string(),
        },
    ]
}

/// Renders the HTML containers for dashboard charts.
///
/// # Arguments
/// * `charts` - The charts to render containers for
///
/// # Returns
/// Maud markup containing a grid of chart container divs.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100 shadow"
                    {}
                }
            }
        }
    )
}

/// The head elements that load ECharts and draw `charts` once the page has loaded.
pub(super) fn charts_head_elements(charts: &[DashboardChart]) -> [HeadElement; 2] {
    [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ]
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Stacked bars of inflow and outflow for each state, in the order the
/// states first appear.
pub(super) fn state_breakdown_chart(breakdown: &[StateBreakdown]) -> Chart {
    let labels: Vec<String> = breakdown.iter().map(|entry| entry.state.clone()).collect();
    let deposits: Vec<f64> = breakdown
        .iter()
        .map(|entry| to_chart_value(entry.deposit))
        .collect();
    let withdrawals: Vec<f64> = breakdown
        .iter()
        .map(|entry| to_chart_value(entry.withdraw))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Inflow vs Outflow by State")
                .subtext("Deposits and withdrawals per state")
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().right(20).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            bar::Bar::new()
                .name("Inflow")
                .stack("total")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .item_style(ItemStyle::new().color(DEPOSIT_COLOR))
                .data(deposits),
        )
        .series(
            bar::Bar::new()
                .name("Outflow")
                .stack("total")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .item_style(ItemStyle::new().color(WITHDRAW_COLOR))
                .data(withdrawals),
        )
}

/// A line of the total amount moved per month, oldest month first.
pub(super) fn monthly_totals_chart(monthly: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = monthly.iter().map(|entry| entry.label.clone()).collect();
    let values: Vec<f64> = monthly
        .iter()
        .map(|entry| to_chart_value(entry.total))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Total Moved per Month")
                .subtext("Deposits and withdrawals combined"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Total")
                .item_style(ItemStyle::new().color(LINE_COLOR))
                .data(values),
        )
}

/// Stop text such as a state called "</script>" from closing the inline script early.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[inline]
fn to_chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
