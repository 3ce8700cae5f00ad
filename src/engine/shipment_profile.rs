// ==========================================
// 装箱预测系统 - 出货画像聚合
// ==========================================
// 输入: ShipmentRecord 序列
// 输出: ShipmentProfile（合计本数 / 有效出货日 / 峰值）
// 红线: 0 本记录计入记录数,不计入有效出货日
// ==========================================

use crate::domain::shipment::{ShipmentProfile, ShipmentRecord};

/// 聚合出货画像（结果与记录顺序无关）
pub fn build_profile(records: &[ShipmentRecord]) -> ShipmentProfile {
    let wig_total: f64 = records.iter().map(|r| r.unit_count).sum();
    let active_days = records.iter().filter(|r| r.is_active_day()).count();
    let peak_daily = records
        .iter()
        .map(|r| r.unit_count)
        .fold(0.0_f64, f64::max);

    let average_per_active_day = if active_days > 0 {
        wig_total / active_days as f64
    } else {
        0.0
    };

    ShipmentProfile {
        record_count: records.len(),
        wig_total,
        active_days,
        idle_days: records.len() - active_days,
        peak_daily,
        average_per_active_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(counts: &[f64]) -> Vec<ShipmentRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, c)| ShipmentRecord::new(Some(format!("4/{}", i + 1)), *c, i + 1))
            .collect()
    }

    #[test]
    fn test_profile_counts_active_days() {
        let profile = build_profile(&records(&[5.0, 0.0, 3.0, 0.0, 2.0]));

        assert_eq!(profile.record_count, 5);
        assert_eq!(profile.wig_total, 10.0);
        assert_eq!(profile.active_days, 3);
        assert_eq!(profile.idle_days, 2);
        assert_eq!(profile.peak_daily, 5.0);
        assert!((profile.average_per_active_day - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_all_zero() {
        let profile = build_profile(&records(&[0.0, 0.0]));

        assert_eq!(profile.wig_total, 0.0);
        assert_eq!(profile.active_days, 0);
        assert_eq!(profile.average_per_active_day, 0.0);
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_profile_order_invariant() {
        let forward = build_profile(&records(&[1.0, 2.0, 4.0, 0.0]));
        let backward = build_profile(&records(&[0.0, 4.0, 2.0, 1.0]));

        assert_eq!(forward.wig_total, backward.wig_total);
        assert_eq!(forward.active_days, backward.active_days);
    }

    #[test]
    fn test_profile_empty() {
        assert!(build_profile(&[]).is_empty());
    }
}
