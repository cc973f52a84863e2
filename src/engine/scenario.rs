use crate::domain::{DealParameters, MonthlyResult, PaymentMethod};

/// Flat capital-gains rate applied to positive gains, regardless of tax mode.
pub const INCOME_TAX_RATE: f64 = 0.15;

fn percent_of(base: f64, percent: f64) -> f64 {
    base * (percent / 100.0)
}

fn income_tax(gain: f64) -> f64 {
    if gain <= 0.0 {
        return 0.0;
    }
    gain * INCOME_TAX_RATE
}

/// Compute the full breakdown of holding the deal for `months` months.
///
/// `bid_override` replaces `params.bid_value` as the acquisition price. The
/// operation order is fixed; results are not rounded.
///
/// `months` must be at least 1 for `monthly_roi` to be meaningful; zero yields
/// a mathematically defined but meaningless rate.
pub fn compute(params: &DealParameters, months: u32, bid_override: Option<f64>) -> MonthlyResult {
    let bid = bid_override.unwrap_or(params.bid_value);
    let n = f64::from(months);

    // Revenue
    let sale_price = params.market_value * (1.0 - params.sale_discount_percent / 100.0);
    let total_rent = params.rent_revenue * n;
    let revenue = sale_price + total_rent;

    // Proportional to the bid
    let auctioneer_fee = percent_of(bid, params.auctioneer_fee_percent);
    let itbi = percent_of(bid, params.itbi_percent);
    let deed = percent_of(bid, params.deed_percent);
    let registry = percent_of(bid, params.registry_percent);

    // Holding
    let condo_total = params.condo_monthly * n;
    let iptu_total = params.iptu_monthly * n;

    let reforms = params.reforms;
    let vacation = params.vacation_cost;
    let debts = params.debts;
    let advisory = params.advisory_fee;

    // Proportional to the sale price, not the bid
    let broker_fee = percent_of(sale_price, params.broker_fee_percent);

    let cost_before_tax = bid
        + auctioneer_fee
        + itbi
        + reforms
        + vacation
        + debts
        + advisory
        + deed
        + registry
        + condo_total
        + iptu_total
        + broker_fee;

    let income_tax = income_tax(revenue - cost_before_tax);
    let total_cost = cost_before_tax + income_tax;
    let net_profit = revenue - total_cost;

    let roi_percent = if total_cost > 0.0 {
        (net_profit / total_cost) * 100.0
    } else {
        0.0
    };
    let monthly_roi = ((1.0 + roi_percent / 100.0).powf(1.0 / n) - 1.0) * 100.0;

    let mut initial_outlay =
        bid + auctioneer_fee + itbi + reforms + vacation + debts + advisory + deed + registry;
    if params.payment_method == PaymentMethod::CashWithDiscount {
        initial_outlay -= percent_of(bid, params.cash_discount_percent);
    }

    MonthlyResult {
        month: months,
        sale_value: sale_price,
        total_revenue: revenue,
        auctioneer_fee,
        itbi,
        reforms,
        vacation,
        debts,
        advisory,
        deed,
        registry,
        condo_total,
        iptu_total,
        opportunity_cost: 0.0,
        financing_interest: 0.0,
        income_tax,
        broker_fee,
        initial_outlay,
        total_cost,
        net_profit,
        roi_percent,
        monthly_roi,
    }
}
