//! 通用类型定义

use crate::error::{Error, Result};

/// 边权重
pub type Weight = f64;

/// 最短路径距离，`None` 表示不可达
pub type Distance = Option<Weight>;

/// 校验边权重
///
/// 只拒绝 NaN 和无穷大。负权重在结构上是允许的，但最短路径的最优性不再成立。
pub fn validate_weight(weight: Weight) -> Result<Weight> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_weight() {
        assert_eq!(validate_weight(2.5).unwrap(), 2.5);
        assert_eq!(validate_weight(-1.0).unwrap(), -1.0);
        assert!(matches!(
            validate_weight(f64::NAN),
            Err(Error::InvalidWeight(_))
        ));
        assert!(validate_weight(f64::INFINITY).is_err());
        assert!(validate_weight(f64::NEG_INFINITY).is_err());
    }
}
