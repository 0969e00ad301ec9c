pub mod stage1_baseline;
pub mod stage2_match_rates;
pub mod stage3_final;
pub mod stage4_breakdown;
pub mod stage5_report;
