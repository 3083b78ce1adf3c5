pub mod stage1_load;
pub mod stage2_aggregate;
pub mod stage3_scale;
pub mod stage4_assign;
pub mod stage5_report;
