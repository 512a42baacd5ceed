//! `tissues`, `lobes`, `macro` 三个小类别的标签表.

use super::Rgb;

/// 脑组织. 按标签值升序排列.
pub(super) static TISSUES: &[(u32, &str, Rgb)] = &[
    (1, "CSF", Rgb::new(0.3, 0.6, 0.9)),
    (2, "Cortical_GM", Rgb::new(0.7, 0.7, 0.7)),
    (3, "Cerebrum_WM", Rgb::new(0.9, 0.9, 0.9)),
    (4, "Subcortical_GM", Rgb::new(0.5, 0.7, 0.4)),
    (5, "Cerebellum_GM", Rgb::new(0.9, 0.6, 0.3)),
    (6, "Cerebellum_WM", Rgb::new(0.8, 0.5, 0.2)),
    (7, "Brainstem", Rgb::new(0.5, 0.5, 0.5)),
];

/// 脑叶. 奇数为右侧, 偶数为左侧.
pub(super) static LOBES: &[(u32, &str, Rgb)] = &[
    (1, "Right_Frontal_Lobe", Rgb::new(0.9, 0.3, 0.3)),
    (2, "Left_Frontal_Lobe", Rgb::new(0.95, 0.35, 0.35)),
    (3, "Right_Temporal_Lobe", Rgb::new(0.3, 0.3, 0.9)),
    (4, "Left_Temporal_Lobe", Rgb::new(0.35, 0.35, 0.95)),
    (5, "Right_Parietal_Lobe", Rgb::new(0.3, 0.8, 0.3)),
    (6, "Left_Parietal_Lobe", Rgb::new(0.35, 0.85, 0.35)),
    (7, "Right_Occipital_Lobe", Rgb::new(0.9, 0.9, 0.3)),
    (8, "Left_Occipital_Lobe", Rgb::new(0.95, 0.95, 0.35)),
    (9, "Right_Limbic_Lobe", Rgb::new(0.7, 0.3, 0.7)),
    (10, "Left_Limbic_Lobe", Rgb::new(0.75, 0.35, 0.75)),
    (11, "Right_Insular_Lobe", Rgb::new(0.9, 0.5, 0.3)),
    (12, "Left_Insular_Lobe", Rgb::new(0.95, 0.55, 0.35)),
];

/// 宏观结构.
pub(super) static MACRO: &[(u32, &str, Rgb)] = &[
    (1, "Left_Cerebrum", Rgb::new(0.8, 0.7, 0.7)),
    (2, "Right_Cerebrum", Rgb::new(0.75, 0.65, 0.65)),
    (3, "Left_Cerebellum", Rgb::new(0.9, 0.6, 0.3)),
    (4, "Right_Cerebellum", Rgb::new(0.85, 0.55, 0.25)),
    (5, "Vermal", Rgb::new(0.95, 0.65, 0.35)),
    (6, "Brainstem", Rgb::new(0.5, 0.5, 0.5)),
];
