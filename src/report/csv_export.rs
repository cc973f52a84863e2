//! CSV export of a deal and its projection.

use crate::domain::{Deal, MarketStats, MonthlyResult, ProfitBand, Projection};
use thiserror::Error;

use super::format::{format_currency, format_percent};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Buffer(String),
}

type TimelineLine = (&'static str, fn(&MonthlyResult) -> f64);

fn timeline_lines() -> [TimelineLine; 17] {
    [
        ("Receita Venda", |r| r.sale_value),
        ("Receita Aluguel", |r| r.rent_revenue()),
        ("Comissão Corretor", |r| r.broker_fee),
        ("Débitos", |r| r.debts),
        ("Reformas", |r| r.reforms),
        ("Desocupação", |r| r.vacation),
        ("Assessoria", |r| r.advisory),
        ("Comissão Leiloeiro", |r| r.auctioneer_fee),
        ("ITBI", |r| r.itbi),
        ("Escritura", |r| r.deed),
        ("Registro", |r| r.registry),
        ("Condomínio", |r| r.condo_total),
        ("IPTU", |r| r.iptu_total),
        ("Imposto de Renda", |r| r.income_tax),
        ("Desembolso Inicial", |r| r.initial_outlay),
        ("Custo Total", |r| r.total_cost),
        ("Resultado Consolidado", |r| r.net_profit),
    ]
}

fn band_label(band: ProfitBand) -> &'static str {
    match band {
        ProfitBand::Target => "meta",
        ProfitBand::Positive => "positivo",
        ProfitBand::Loss => "prejuízo",
    }
}

/// Render the deal header, timeline, bid table and market stats as CSV.
///
/// Sections are separated by an empty record; rows have varying widths.
pub fn export_csv(deal: &Deal, projection: &Projection) -> Result<String, ReportError> {
    let params = &deal.params;
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    wtr.write_record(["Relatório", deal.city.as_str(), deal.property_origin.as_str()])?;
    wtr.write_record(["Endereço", deal.address.as_str()])?;
    wtr.write_record(["Tipo Leilão", deal.auction_type.label()])?;
    wtr.write_record(["Link Leilão", deal.auction_link.as_str()])?;
    wtr.write_record(["Forma Pagamento", params.payment_method.label()])?;
    if params.payment_method.is_financed() {
        // Terms are recorded for reference; the scenario does not model interest.
        wtr.write_record([
            "Financiamento".to_string(),
            format!("Entrada {}", format_percent(params.financing_entry_percent)),
            format!("{} meses", params.financing_months),
            format!("Taxa {} a.m.", format_percent(params.financing_rate_monthly)),
            "não incluído no resultado".to_string(),
        ])?;
    }
    wtr.write_record(["Tributação", params.income_tax_mode.label()])?;
    wtr.write_record(["Valor Lance", format_currency(params.bid_value).as_str()])?;
    wtr.write_record(["Lucro Mínimo", format_percent(params.min_profit_percent).as_str()])?;
    wtr.write_record([""])?;

    let mut header = vec!["Item".to_string()];
    header.extend(projection.timeline.iter().map(|r| format!("{} meses", r.month)));
    wtr.write_record(&header)?;

    for (label, value_of) in timeline_lines() {
        let mut record = vec![label.to_string()];
        record.extend(projection.timeline.iter().map(|r| format_currency(value_of(r))));
        wtr.write_record(&record)?;
    }

    let mut roi = vec!["Lucro (%)".to_string()];
    roi.extend(projection.timeline.iter().map(|r| format_percent(r.roi_percent)));
    wtr.write_record(&roi)?;

    let mut monthly = vec!["Taxa Equiv. Mensal".to_string()];
    monthly.extend(projection.timeline.iter().map(|r| format_percent(r.monthly_roi)));
    wtr.write_record(&monthly)?;

    let mut bands = vec!["Faixa".to_string()];
    bands.extend(projection.timeline.iter().map(|r| {
        band_label(ProfitBand::classify(r.roi_percent, params.min_profit_percent)).to_string()
    }));
    wtr.write_record(&bands)?;
    wtr.write_record([""])?;

    wtr.write_record(["Valor Lance", "Meses", "Resultado", "Lucro (%)", "Faixa"])?;
    for row in &projection.bid_table {
        let bid = format_currency(row.bid_value);
        for outcome in &row.results_by_month {
            let band = ProfitBand::classify(outcome.roi, params.min_profit_percent);
            wtr.write_record([
                bid.clone(),
                outcome.month.to_string(),
                format_currency(outcome.profit),
                format_percent(outcome.roi),
                band_label(band).to_string(),
            ])?;
        }
    }

    if let Some(stats) = MarketStats::from_comparables(&deal.market_research) {
        wtr.write_record([""])?;
        wtr.write_record(["Pesquisa de Mercado", "Média", "Mediana", "Mínimo", "Máximo"])?;
        wtr.write_record([
            format!("{} imóveis", stats.count),
            format_currency(stats.average),
            format_currency(stats.median),
            format_currency(stats.min),
            format_currency(stats.max),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Buffer(e.to_string()))
}
