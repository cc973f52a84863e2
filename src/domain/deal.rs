//! Deal parameters and the persisted deal record.

use crate::domain::{DealId, MarketComparable, TimeMs};
use serde::{Deserialize, Serialize};

/// How the bid is paid.
///
/// Only [`PaymentMethod::CashWithDiscount`] changes the numbers (initial outlay).
/// Financing and installment variants are recorded but not modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CashWithDiscount,
    JudicialInstallment,
    FinancingCaixa,
    FinancingBb,
    FinancingItau,
    FinancingSantander,
    FinancingBradesco,
    Fgts,
    Consortium,
    CreditLetter,
}

impl PaymentMethod {
    /// Human-facing label, as printed on reports.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "À Vista",
            PaymentMethod::CashWithDiscount => "À Vista com Desconto",
            PaymentMethod::JudicialInstallment => "Parcelamento Judicial",
            PaymentMethod::FinancingCaixa => "Financiamento - Caixa",
            PaymentMethod::FinancingBb => "Financiamento - BB",
            PaymentMethod::FinancingItau => "Financiamento - Itaú",
            PaymentMethod::FinancingSantander => "Financiamento - Santander",
            PaymentMethod::FinancingBradesco => "Financiamento - Bradesco",
            PaymentMethod::Fgts => "FGTS",
            PaymentMethod::Consortium => "Consórcio Contemplado",
            PaymentMethod::CreditLetter => "Carta de Crédito",
        }
    }

    pub fn is_financed(&self) -> bool {
        matches!(
            self,
            PaymentMethod::JudicialInstallment
                | PaymentMethod::FinancingCaixa
                | PaymentMethod::FinancingBb
                | PaymentMethod::FinancingItau
                | PaymentMethod::FinancingSantander
                | PaymentMethod::FinancingBradesco
        )
    }
}

/// Income tax regime of the buyer. Does not alter the flat 15% rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Pessoa física.
    #[default]
    #[serde(alias = "PF")]
    Individual,
    /// Pessoa jurídica.
    #[serde(alias = "PJ")]
    Corporate,
}

impl TaxMode {
    pub fn label(&self) -> &'static str {
        match self {
            TaxMode::Individual => "Pessoa Física",
            TaxMode::Corporate => "Pessoa Jurídica",
        }
    }
}

/// Kind of auction the property is offered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionType {
    JudicialFirst,
    JudicialSecond,
    ExtrajudicialLaw9514,
    #[default]
    ExtrajudicialBanks,
    BankDirectSale,
    DirectSaleAfterAuction,
    PublicBodies,
}

impl AuctionType {
    pub fn label(&self) -> &'static str {
        match self {
            AuctionType::JudicialFirst => "Judicial - 1º Leilão",
            AuctionType::JudicialSecond => "Judicial - 2º Leilão",
            AuctionType::ExtrajudicialLaw9514 => "Extrajudicial - Lei 9.514",
            AuctionType::ExtrajudicialBanks => "Extrajudicial - Bancos",
            AuctionType::BankDirectSale => "Venda Direta Bancos",
            AuctionType::DirectSaleAfterAuction => "Venda Direta Pós-Leilão",
            AuctionType::PublicBodies => "Leilão Órgãos Públicos",
        }
    }
}

/// Numeric inputs of one deal.
///
/// Percentages are whole numbers (`5.0` means 5%). Every field defaults to zero
/// when absent from the input, so callers never hand the engine a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DealParameters {
    // Acquisition
    pub bid_value: f64,
    pub bid_increment: f64,
    pub auctioneer_fee_percent: f64,
    pub itbi_percent: f64,
    pub deed_percent: f64,
    pub registry_percent: f64,

    // Holding
    pub condo_monthly: f64,
    pub iptu_monthly: f64,
    pub reforms: f64,
    pub vacation_cost: f64,
    pub debts: f64,
    pub advisory_fee: f64,

    // Payment
    pub payment_method: PaymentMethod,
    pub cash_discount_percent: f64,
    pub financing_entry_percent: f64,
    pub financing_rate_monthly: f64,
    pub financing_months: u32,

    // Disposition
    pub market_value: f64,
    pub sale_discount_percent: f64,
    pub broker_fee_percent: f64,
    pub rent_revenue: f64,

    // Policy
    pub min_profit_percent: f64,
    pub income_tax_mode: TaxMode,
}

impl DealParameters {
    /// The values a fresh deal form starts from.
    pub fn stock() -> Self {
        Self {
            bid_value: 110_000.0,
            bid_increment: 3_000.0,
            auctioneer_fee_percent: 5.0,
            itbi_percent: 2.0,
            deed_percent: 1.5,
            registry_percent: 1.0,
            condo_monthly: 0.0,
            iptu_monthly: 0.0,
            reforms: 30_000.0,
            vacation_cost: 5_000.0,
            debts: 0.0,
            advisory_fee: 0.0,
            payment_method: PaymentMethod::Cash,
            cash_discount_percent: 10.0,
            financing_entry_percent: 25.0,
            financing_rate_monthly: 1.0,
            financing_months: 36,
            market_value: 260_000.0,
            sale_discount_percent: 0.0,
            broker_fee_percent: 6.0,
            rent_revenue: 0.0,
            min_profit_percent: 30.0,
            income_tax_mode: TaxMode::Individual,
        }
    }
}

/// A saved deal: descriptive info, parameters and market research.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub last_modified_ms: TimeMs,
    pub city: String,
    pub address: String,
    pub auction_link: String,
    pub property_origin: String,
    pub auction_type: AuctionType,
    pub params: DealParameters,
    pub market_research: Vec<MarketComparable>,
}

impl Deal {
    /// A blank, unsaved deal seeded with the stock parameters.
    pub fn new_draft() -> Self {
        Self {
            property_origin: "Banco".to_string(),
            params: DealParameters::stock(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let params: DealParameters =
            serde_json::from_str(r#"{"bidValue": 1000, "itbiPercent": 3}"#).unwrap();
        assert_eq!(params.bid_value, 1000.0);
        assert_eq!(params.itbi_percent, 3.0);
        assert_eq!(params.reforms, 0.0);
        assert_eq!(params.market_value, 0.0);
        assert_eq!(params.payment_method, PaymentMethod::Cash);
        assert_eq!(params.income_tax_mode, TaxMode::Individual);
    }

    #[test]
    fn test_tax_mode_accepts_short_codes() {
        let mode: TaxMode = serde_json::from_str("\"PJ\"").unwrap();
        assert_eq!(mode, TaxMode::Corporate);
        let mode: TaxMode = serde_json::from_str("\"individual\"").unwrap();
        assert_eq!(mode, TaxMode::Individual);
    }

    #[test]
    fn test_payment_method_serialization() {
        let json = serde_json::to_string(&PaymentMethod::CashWithDiscount).unwrap();
        assert_eq!(json, "\"cash_with_discount\"");
        assert_eq!(PaymentMethod::CashWithDiscount.label(), "À Vista com Desconto");
    }

    #[test]
    fn test_financed_methods() {
        assert!(PaymentMethod::FinancingCaixa.is_financed());
        assert!(PaymentMethod::JudicialInstallment.is_financed());
        assert!(!PaymentMethod::Cash.is_financed());
        assert!(!PaymentMethod::Fgts.is_financed());
    }

    #[test]
    fn test_draft_uses_stock_parameters() {
        let deal = Deal::new_draft();
        assert!(deal.id.is_blank());
        assert_eq!(deal.params.bid_value, 110_000.0);
        assert_eq!(deal.params.bid_increment, 3_000.0);
        assert_eq!(deal.params.min_profit_percent, 30.0);
    }

    #[test]
    fn test_deal_json_is_camel_case() {
        let deal = Deal::new_draft();
        let json = serde_json::to_value(&deal).unwrap();
        assert!(json["lastModifiedMs"].is_i64());
        assert!(json["params"]["auctioneerFeePercent"].is_f64());
        assert!(json["marketResearch"].is_array());
    }
}
