//! Plain-text report over the engine's derived results

use std::fmt::Write;

use venturecast_core::engine::Engine;
use venturecast_core::usage::{UsageWorkload, recommend_tier};

use crate::format::{compact_currency, count, percentage};

/// Render the full report for the engine's current state
pub fn render(engine: &Engine) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "venturecast — scenario: {}, provider: {}, AI hosting: {}",
        engine.scenario(),
        engine.provider(),
        engine.hosting()
    );
    let _ = writeln!(out);

    render_dcf(&mut out, engine);
    render_metrics(&mut out, engine);
    render_valuations(&mut out, engine);
    render_revenue(&mut out, engine);
    render_infrastructure(&mut out, engine);
    render_funding(&mut out, engine);
    render_usage_tiers(&mut out, engine);

    out
}

fn render_dcf(out: &mut String, engine: &Engine) {
    let dcf = engine.dcf_result();

    let _ = writeln!(out, "DCF valuation");
    let _ = writeln!(
        out,
        "  {:>4}  {:>10}  {:>10}  {:>10}  {:>9}  {:>10}",
        "Year", "Revenue", "EBITDA", "FCF", "PV factor", "PV"
    );
    for cf in &dcf.cash_flows {
        let _ = writeln!(
            out,
            "  {:>4}  {:>10}  {:>10}  {:>10}  {:>9.3}  {:>10}",
            cf.year,
            compact_currency(cf.revenue),
            compact_currency(cf.ebitda),
            compact_currency(cf.free_cash_flow),
            cf.pv_factor,
            compact_currency(cf.present_value),
        );
    }
    let _ = writeln!(out, "  PV of cash flows:  {}", compact_currency(dcf.total_pv));
    let _ = writeln!(out, "  Terminal PV:       {}", compact_currency(dcf.terminal_pv));
    let _ = writeln!(
        out,
        "  Enterprise value:  {}",
        compact_currency(dcf.enterprise_value)
    );
    let _ = writeln!(out, "  Equity value:      {}", compact_currency(dcf.equity_value));
    let _ = writeln!(out);
}

fn render_metrics(out: &mut String, engine: &Engine) {
    let metrics = engine.financial_metrics();

    let _ = writeln!(out, "Financial metrics");
    let _ = writeln!(out, "  NPV:            {}", compact_currency(metrics.npv));
    let _ = writeln!(out, "  IRR (approx):   {}", percentage(metrics.irr));
    let _ = writeln!(out, "  Payback:        {:.1} months", metrics.payback_months);
    let _ = writeln!(out, "  WACC:           {}", percentage(metrics.wacc));
    let _ = writeln!(out);
}

fn render_valuations(out: &mut String, engine: &Engine) {
    let set = engine.valuation_estimates();

    let _ = writeln!(out, "Valuation estimates");
    for estimate in set.estimates() {
        let _ = writeln!(
            out,
            "  {:<18} {}",
            estimate.method.label(),
            compact_currency(estimate.amount)
        );
    }
    let _ = writeln!(out, "  {:<18} {}", "Average", compact_currency(set.average()));
    let _ = writeln!(out);
}

fn render_revenue(out: &mut String, engine: &Engine) {
    let projection = engine.revenue_projection();

    let _ = writeln!(out, "Revenue projection");
    let _ = writeln!(
        out,
        "  {:<12} {:>9} {:>10} {:>10} {:>10} {:>10}",
        "Segment", "Y1 users", "Y5 users", "Y1 rev", "Y3 rev", "Y5 rev"
    );
    for seg in &projection.segments {
        let _ = writeln!(
            out,
            "  {:<12} {:>9} {:>10} {:>10} {:>10} {:>10}",
            seg.segment.label(),
            count(seg.year1_users),
            count(seg.year5_users),
            compact_currency(seg.year1_revenue),
            compact_currency(seg.year3_revenue),
            compact_currency(seg.year5_revenue),
        );
    }
    let _ = writeln!(
        out,
        "  Totals: Y1 {}, Y3 {}, Y5 {}",
        compact_currency(projection.year1_revenue),
        compact_currency(projection.year3_revenue),
        compact_currency(projection.year5_revenue),
    );
    let _ = writeln!(out, "  CAGR: {}", percentage(projection.cagr));
    let _ = writeln!(
        out,
        "  Revenue-stream NPV: {}",
        compact_currency(engine.revenue_npv())
    );
    let _ = writeln!(out);
}

fn render_infrastructure(out: &mut String, engine: &Engine) {
    let costs = engine.infrastructure_costs();

    let _ = writeln!(out, "Monthly infrastructure costs ({})", engine.provider());
    let _ = writeln!(out, "  Compute:    {}", compact_currency(costs.compute));
    let _ = writeln!(out, "  AI:         {}", compact_currency(costs.ai));
    let _ = writeln!(out, "  Storage:    {}", compact_currency(costs.storage));
    let _ = writeln!(out, "  Bandwidth:  {}", compact_currency(costs.bandwidth));
    let _ = writeln!(out, "  Total:      {}", compact_currency(costs.total));
    let _ = writeln!(out);
}

fn render_funding(out: &mut String, engine: &Engine) {
    let round = engine.funding_round();

    let _ = writeln!(out, "Use of funds");
    for allocation in engine.funding_allocation() {
        let _ = writeln!(
            out,
            "  {:<16} {} ({:.0}%)",
            allocation.category.label(),
            compact_currency(allocation.amount),
            allocation.normalized_percent,
        );
    }
    let _ = writeln!(
        out,
        "  Round: pre-money {}, post-money {}, equity {:.1}%",
        compact_currency(round.pre_money),
        compact_currency(round.post_money),
        round.equity_percent,
    );
    let _ = writeln!(out);
}

fn render_usage_tiers(out: &mut String, engine: &Engine) {
    let prices = engine.segment_prices();

    let _ = writeln!(out, "Usage tier fit (at current prices)");
    for workload in UsageWorkload::default_scenarios() {
        // Default workloads are non-negative, so recommendation cannot fail
        if let Ok(rec) = recommend_tier(&workload, prices) {
            let _ = writeln!(
                out,
                "  {:<20} {:>12} tokens/mo -> {} (${}/mo)",
                workload.label(),
                count(rec.monthly_tokens),
                rec.tier.label(),
                rec.monthly_price,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venturecast_core::engine::Engine;

    #[test]
    fn test_render_covers_every_section() {
        let engine = Engine::new().unwrap();
        let report = render(&engine);

        for heading in [
            "DCF valuation",
            "Financial metrics",
            "Valuation estimates",
            "Revenue projection",
            "Monthly infrastructure costs",
            "Use of funds",
            "Usage tier fit",
        ] {
            assert!(report.contains(heading), "missing section {heading:?}");
        }

        // All four valuation methods appear
        assert!(report.contains("Berkus"));
        assert!(report.contains("Cost to Duplicate"));
        assert!(report.contains("Payback"));
    }

    #[test]
    fn test_render_reflects_scenario() {
        let engine = Engine::with_scenario(venturecast_core::scenario::ScenarioKind::Optimistic)
            .unwrap();
        let report = render(&engine);
        assert!(report.contains("scenario: optimistic"));
    }
}
