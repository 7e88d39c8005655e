use std::rc::Rc;

use shared::format::{format_currency, format_percent};
use shared::models::Payment;
use shared::{PaymentStatistics, StatisticsCache};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::config::FrontendConfig;

#[derive(Properties, PartialEq)]
pub struct PaymentStatisticsCardProps {
    pub payments: Rc<[Payment]>,
}

/// Totals of the given payments by status.
#[function_component(PaymentStatisticsCard)]
pub fn payment_statistics_card(props: &PaymentStatisticsCardProps) -> Html {
    let cache = use_mut_ref(StatisticsCache::default);
    let stats: PaymentStatistics = cache.borrow_mut().get(&props.payments);
    let currency = FrontendConfig::new().currency;

    let stat = |title: &str, amount, count: usize, icon: IconId, tone: &str| {
        html! {
            <div class="stat">
                <div class={classes!("stat-figure", tone.to_string())}>
                    <Icon icon_id={icon} class="w-8 h-8" />
                </div>
                <div class="stat-title">{ title.to_string() }</div>
                <div class={classes!("stat-value", "text-2xl", tone.to_string())}>
                    { format_currency(amount, &currency) }
                </div>
                <div class="stat-desc">{ format!("{count} payment(s)") }</div>
            </div>
        }
    };

    html! {
        <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
            { stat("Total due", stats.total_due, stats.count, IconId::HeroiconsOutlineBanknotes, "text-base-content") }
            { stat("Paid", stats.total_paid, stats.paid_count, IconId::HeroiconsOutlineCheck, "text-success") }
            { stat("Pending", stats.total_pending, stats.pending_count, IconId::HeroiconsOutlineClock, "text-warning") }
            { stat("Late", stats.total_late, stats.late_count, IconId::HeroiconsOutlineExclamationTriangle, "text-error") }
            if let Some(rate) = stats.collection_rate() {
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineChartPie} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Collected" }</div>
                    <div class="stat-value text-2xl text-primary">{ format_percent(rate) }</div>
                    <div class="stat-desc">{ "of the amount due" }</div>
                </div>
            }
        </div>
    }
}
