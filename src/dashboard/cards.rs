//! Summary cards for the filtered transactions.

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{dashboard::aggregation::Totals, html::format_currency};

/// The colour of the value shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardTone {
    Positive,
    Negative,
    Neutral,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Positive => "text-green-600 dark:text-green-400",
            CardTone::Negative => "text-red-600 dark:text-red-400",
            CardTone::Neutral => "text-gray-900 dark:text-white",
        }
    }

    fn for_balance(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            CardTone::Negative
        } else {
            CardTone::Positive
        }
    }
}

/// Renders the inflow, outflow, pending and net balance cards.
pub(super) fn summary_cards_view(totals: &Totals) -> Markup {
    html! {
        section
            id="summary-cards"
            class="w-full mx-auto mb-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4"
        {
            (summary_card("Inflow", &format_currency(totals.inflow), CardTone::Positive))
            (summary_card("Outflow", &format_currency(totals.outflow), CardTone::Negative))
            (summary_card("Pending", &totals.pending.to_string(), CardTone::Neutral))
            (summary_card("Net balance", &format_currency(totals.net), CardTone::for_balance(totals.net)))
        }
    }
}

fn summary_card(title: &str, value: &str, tone: CardTone) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md"
            data-card=(title)
            aria-label=(format!("{title}: {value}"))
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p class={ "mt-2 text-2xl font-bold " (tone.class()) } { (value) }
        }
    }
}
