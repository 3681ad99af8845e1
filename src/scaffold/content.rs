//! Static text emitted into the scaffolds.
//!
//! The calling agents read these strings verbatim, so they are kept as
//! constant data rather than inline in the builders.

// ============================================================================
// Consistency matrix
// ============================================================================

/// Scoring scale shown alongside an empty consistency matrix.
pub const MATRIX_INSTRUCTIONS: &str = "各セル [i][j] に、仮説 i と仮説 j の整合性スコア (0.0-1.0) を入力してください。\n\
0.0 = 完全に矛盾, 0.5 = 独立（関連なし）, 1.0 = 完全に整合";

// ============================================================================
// Confidence interpretation
// ============================================================================

pub const INTERPRETATION_HIGH_DISAGREEMENT: &str =
    "エージェント間の見解が大きく分かれています。追加の分析が必要です。";
pub const INTERPRETATION_PARTIAL_AGREEMENT: &str =
    "部分的な合意がありますが、重要な論点で不一致が残っています。";
pub const INTERPRETATION_LOW_CONFIDENCE: &str =
    "合意はあるが、全体の確信度が低い。情報不足の可能性があります。";
pub const INTERPRETATION_MODERATE_CONFIDENCE: &str =
    "中程度の確信度。提案は条件付きで採用可能ですが、リスク緩和策が必要です。";
pub const INTERPRETATION_HIGH_CONFIDENCE: &str =
    "高い確信度と合意。提案は十分な根拠があります。";
pub const INTERPRETATION_VERY_HIGH_CONFIDENCE: &str =
    "非常に高い確信度。ただし、全員一致は確証バイアスの可能性も考慮してください。";

// ============================================================================
// Contradiction analysis
// ============================================================================

pub const LOGICAL_CONTRADICTION_QUESTION: &str =
    "AとBは論理的に矛盾するか？（AならばBでない、が成立するか）";
pub const SCOPE_DIFFERENCE_QUESTION: &str =
    "AとBは異なるスコープ（時間、空間、主体）について述べていないか？";
pub const ABSTRACTION_MISMATCH_QUESTION: &str = "AとBは異なる抽象度レベルの主張ではないか？";

/// Ways to reconcile two claims, in the order agents should consider them.
pub const RESOLUTION_STRATEGIES: [&str; 4] = [
    "スコープの明確化（条件分岐）",
    "抽象度の統一",
    "弁証法的止揚（上位概念の発見）",
    "両方を棄却して第三の仮説を生成",
];

// ============================================================================
// Usage hints
// ============================================================================

pub const USAGE_MATRIX: &str = "使用法: --mode matrix 仮説1 仮説2 仮説3 ...";
pub const USAGE_SCORE: &str = "使用法: --mode score 0.8 0.6 0.9 ...";
pub const USAGE_CONTRADICTION: &str = "使用法: --mode contradiction '主張A' '主張B'";
pub const USAGE_NON_NUMERIC: &str = "エラー: スコアは数値で指定してください";
