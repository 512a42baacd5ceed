//! `structures` 类别标签表: 皮层下结构、脑室、小脑, 以及 100~207 的皮层分区.
//!
//! 皮层下结构逐个指定颜色. 皮层分区按所属脑叶分组着色, 组内以标签奇偶区分左右:
//! 偶数 (右侧) 取基础色, 奇数 (左侧) 每个通道 +0.05. 该规则没有解剖学含义,
//! 只为保证输出颜色与 volBrain 原有结果一致.

use super::Rgb;

/// 皮层分区的着色分组.
#[derive(Copy, Clone, Debug)]
enum Lobe {
    Frontal,
    Temporal,
    Parietal,
    Occipital,
    Cingulate,
    Insula,
    Parahippocampal,
    CentralOperculum,
}

impl Lobe {
    /// `(偶数标签颜色, 奇数标签颜色)`.
    ///
    /// 奇数色直接写成字面量, 以免浮点加法引入 `0.8500000000000001` 之类的误差.
    const fn shades(self) -> (Rgb, Rgb) {
        match self {
            Lobe::Frontal => (Rgb::new(0.8, 0.2, 0.2), Rgb::new(0.85, 0.25, 0.25)),
            Lobe::Temporal => (Rgb::new(0.2, 0.2, 0.8), Rgb::new(0.25, 0.25, 0.85)),
            Lobe::Parietal => (Rgb::new(0.2, 0.7, 0.3), Rgb::new(0.25, 0.75, 0.35)),
            Lobe::Occipital => (Rgb::new(0.9, 0.8, 0.2), Rgb::new(0.95, 0.85, 0.25)),
            Lobe::Cingulate => (Rgb::new(0.6, 0.2, 0.6), Rgb::new(0.65, 0.25, 0.65)),
            Lobe::Insula => (Rgb::new(0.9, 0.5, 0.2), Rgb::new(0.95, 0.55, 0.25)),
            Lobe::Parahippocampal => (Rgb::new(0.8, 0.7, 0.3), Rgb::new(0.85, 0.75, 0.35)),
            Lobe::CentralOperculum => (Rgb::new(0.9, 0.4, 0.5), Rgb::new(0.95, 0.45, 0.55)),
        }
    }
}

/// 皮层分区 `id` 的颜色.
const fn cortex(id: u32, lobe: Lobe) -> Rgb {
    let (even, odd) = lobe.shades();
    if id % 2 == 0 {
        even
    } else {
        odd
    }
}

/// 按照颜色写法展开单项颜色: 显式 `(r, g, b)` 或皮层分组名.
macro_rules! color {
    ($id: literal, ($r: literal, $g: literal, $b: literal)) => {
        Rgb::new($r, $g, $b)
    };
    ($id: literal, $lobe: ident) => {
        cortex($id, Lobe::$lobe)
    };
}

macro_rules! table {
    ($($id: literal => $name: literal, $color: tt;)*) => {
        &[$(($id, $name, color!($id, $color)),)*]
    };
}

/// 按标签值升序排列.
pub(super) static STRUCTURES: &[(u32, &str, Rgb)] = table! {
    4 => "3rd_Ventricle", (0.2, 0.4, 0.9);
    11 => "4th_Ventricle", (0.3, 0.5, 0.95);
    23 => "Right_Accumbens", (0.9, 0.3, 0.5);
    30 => "Left_Accumbens", (0.95, 0.35, 0.55);
    31 => "Right_Amygdala", (0.8, 0.2, 0.2);
    32 => "Left_Amygdala", (0.85, 0.25, 0.25);
    35 => "Brainstem", (0.5, 0.5, 0.5);
    36 => "Right_Caudate", (0.3, 0.7, 0.4);
    37 => "Left_Caudate", (0.35, 0.75, 0.45);
    38 => "Right_Cerebellum_Exterior", (0.9, 0.6, 0.3);
    39 => "Left_Cerebellum_Exterior", (0.95, 0.65, 0.35);
    40 => "Right_Cerebellum_White_Matter", (0.7, 0.5, 0.3);
    41 => "Left_Cerebellum_White_Matter", (0.75, 0.55, 0.35);
    44 => "Right_Cerebral_White_Matter", (0.9, 0.9, 0.9);
    45 => "Left_Cerebral_White_Matter", (0.85, 0.85, 0.85);
    47 => "Right_Hippocampus", (0.9, 0.8, 0.2);
    48 => "Left_Hippocampus", (0.95, 0.85, 0.25);
    49 => "Right_Inf_Lat_Vent", (0.25, 0.45, 0.85);
    50 => "Left_Inf_Lat_Vent", (0.35, 0.55, 0.9);
    51 => "Right_Lateral_Ventricle", (0.2, 0.5, 1.0);
    52 => "Left_Lateral_Ventricle", (0.3, 0.6, 1.0);
    55 => "Right_Pallidum", (0.4, 0.6, 0.3);
    56 => "Left_Pallidum", (0.45, 0.65, 0.35);
    57 => "Right_Putamen", (0.3, 0.8, 0.4);
    58 => "Left_Putamen", (0.35, 0.85, 0.45);
    59 => "Right_Thalamus", (0.6, 0.2, 0.6);
    60 => "Left_Thalamus", (0.65, 0.25, 0.65);
    61 => "Right_Ventral_DC", (0.7, 0.4, 0.7);
    62 => "Left_Ventral_DC", (0.75, 0.45, 0.75);
    71 => "Lobules_I-V", (0.85, 0.5, 0.2);
    72 => "Lobules_VI-VII", (0.9, 0.55, 0.25);
    73 => "Lobules_VIII-X", (0.95, 0.6, 0.3);
    75 => "Left_Basal_Forebrain", (0.8, 0.5, 0.6);
    76 => "Right_Basal_Forebrain", (0.85, 0.55, 0.65);
    100 => "R_anterior_cingulate", Frontal;
    101 => "L_anterior_cingulate", Frontal;
    102 => "R_anterior_insula", Insula;
    103 => "L_anterior_insula", Insula;
    104 => "R_anterior_orbital", Frontal;
    105 => "L_anterior_orbital", Frontal;
    106 => "R_angular_gyrus", Parietal;
    107 => "L_angular_gyrus", Parietal;
    108 => "R_calcarine_cortex", Occipital;
    109 => "L_calcarine_cortex", Occipital;
    112 => "R_central_operculum", CentralOperculum;
    113 => "L_central_operculum", CentralOperculum;
    114 => "R_cuneus", Occipital;
    115 => "L_cuneus", Occipital;
    116 => "R_entorhinal", Parahippocampal;
    117 => "L_entorhinal", Parahippocampal;
    118 => "R_frontal_operculum", Frontal;
    119 => "L_frontal_operculum", Frontal;
    120 => "R_frontal_pole", Frontal;
    121 => "L_frontal_pole", Frontal;
    122 => "R_fusiform_gyrus", Temporal;
    123 => "L_fusiform_gyrus", Temporal;
    124 => "R_gyrus_rectus", Frontal;
    125 => "L_gyrus_rectus", Frontal;
    128 => "R_inf_occipital", Occipital;
    129 => "L_inf_occipital", Occipital;
    132 => "R_inf_temporal", Temporal;
    133 => "L_inf_temporal", Temporal;
    134 => "R_lingual_gyrus", Occipital;
    135 => "L_lingual_gyrus", Occipital;
    136 => "R_lateral_orbital", Frontal;
    137 => "L_lateral_orbital", Frontal;
    138 => "R_middle_cingulate", Cingulate;
    139 => "L_middle_cingulate", Cingulate;
    140 => "R_medial_frontal", Frontal;
    141 => "L_medial_frontal", Frontal;
    142 => "R_middle_frontal", Frontal;
    143 => "L_middle_frontal", Frontal;
    144 => "R_middle_occipital", Occipital;
    145 => "L_middle_occipital", Occipital;
    146 => "R_medial_orbital", Frontal;
    147 => "L_medial_orbital", Frontal;
    148 => "R_postcentral_medial", Parietal;
    149 => "L_postcentral_medial", Parietal;
    150 => "R_precentral_medial", Frontal;
    151 => "L_precentral_medial", Frontal;
    152 => "R_sup_frontal_medial", Frontal;
    153 => "L_sup_frontal_medial", Frontal;
    154 => "R_middle_temporal", Temporal;
    155 => "L_middle_temporal", Temporal;
    156 => "R_occipital_pole", Occipital;
    157 => "L_occipital_pole", Occipital;
    160 => "R_occipital_fusiform", Occipital;
    161 => "L_occipital_fusiform", Occipital;
    162 => "R_opercular_inf_frontal", Frontal;
    163 => "L_opercular_inf_frontal", Frontal;
    164 => "R_orbital_inf_frontal", Frontal;
    165 => "L_orbital_inf_frontal", Frontal;
    166 => "R_posterior_cingulate", Cingulate;
    167 => "L_posterior_cingulate", Cingulate;
    168 => "R_precuneus", Parietal;
    169 => "L_precuneus", Parietal;
    170 => "R_parahippocampal", Parahippocampal;
    171 => "L_parahippocampal", Parahippocampal;
    172 => "R_posterior_insula", Insula;
    173 => "L_posterior_insula", Insula;
    174 => "R_parietal_operculum", Parietal;
    175 => "L_parietal_operculum", Parietal;
    176 => "R_postcentral_gyrus", Parietal;
    177 => "L_postcentral_gyrus", Parietal;
    178 => "R_posterior_orbital", Frontal;
    179 => "L_posterior_orbital", Frontal;
    180 => "R_planum_polare", Temporal;
    181 => "L_planum_polare", Temporal;
    182 => "R_precentral_gyrus", Frontal;
    183 => "L_precentral_gyrus", Frontal;
    184 => "R_planum_temporale", Temporal;
    185 => "L_planum_temporale", Temporal;
    186 => "R_subcallosal", Frontal;
    187 => "L_subcallosal", Frontal;
    190 => "R_sup_frontal", Frontal;
    191 => "L_sup_frontal", Frontal;
    192 => "R_supplementary_motor", Frontal;
    193 => "L_supplementary_motor", Frontal;
    194 => "R_supramarginal", Parietal;
    195 => "L_supramarginal", Parietal;
    196 => "R_sup_occipital", Occipital;
    197 => "L_sup_occipital", Occipital;
    198 => "R_sup_parietal_lobule", Parietal;
    199 => "L_sup_parietal_lobule", Parietal;
    200 => "R_sup_temporal", Temporal;
    201 => "L_sup_temporal", Temporal;
    202 => "R_temporal_pole", Temporal;
    203 => "L_temporal_pole", Temporal;
    204 => "R_triangular_inf_frontal", Frontal;
    205 => "L_triangular_inf_frontal", Frontal;
    206 => "R_transverse_temporal", Temporal;
    207 => "L_transverse_temporal", Temporal;
};
