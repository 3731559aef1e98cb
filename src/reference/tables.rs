//! 내장 참조표. 황산코발트(칠수화물 기준) 수용액 농도-밀도표와 물의 포화증기압표.

/// 기준 온도(°C)별 (농도 %, 밀도 g/cm³) 점열.
pub(super) const DENSITY_CURVES: &[(f64, &[(f64, f64)])] = &[
    (
        20.0,
        &[
            (0.0, 1.000),
            (10.0, 1.092),
            (15.0, 1.142),
            (20.0, 1.195),
            (25.0, 1.250),
            (30.0, 1.308),
            (35.0, 1.368),
            (40.0, 1.431),
            (45.0, 1.497),
            (48.0, 1.540),
            (50.0, 1.569),
            (51.0, 1.584),
            (52.0, 1.599),
        ],
    ),
    (
        40.0,
        &[
            (0.0, 1.000),
            (15.0, 1.126),
            (20.0, 1.175),
            (25.0, 1.227),
            (30.0, 1.282),
            (35.0, 1.340),
            (40.0, 1.401),
            (45.0, 1.465),
            (48.0, 1.505),
            (50.0, 1.533),
            (51.0, 1.547),
            (52.0, 1.561),
        ],
    ),
    (
        50.0,
        &[
            (0.0, 1.000),
            (20.0, 1.160),
            (25.0, 1.210),
            (30.0, 1.263),
            (35.0, 1.319),
            (40.0, 1.378),
            (45.0, 1.440),
            (48.0, 1.478),
            (50.0, 1.505),
            (51.0, 1.519),
            (52.0, 1.533),
        ],
    ),
    (
        55.0,
        &[
            (0.0, 1.000),
            (30.0, 1.247),
            (34.0, 1.293),
            (38.0, 1.345),
            (42.0, 1.400),
            (46.0, 1.458),
            (49.0, 1.500),
            (50.0, 1.515),
            (51.0, 1.530),
            (51.8, 1.540),
        ],
    ),
    (
        60.0,
        &[
            (0.0, 1.000),
            (32.0, 1.268),
            (36.0, 1.316),
            (40.0, 1.368),
            (44.0, 1.423),
            (48.0, 1.482),
            (50.0, 1.512),
            (51.0, 1.527),
            (52.0, 1.542),
            (53.0, 1.557),
        ],
    ),
    (
        80.0,
        &[
            (0.0, 0.992),
            (40.0, 1.315),
            (45.0, 1.367),
            (48.0, 1.405),
            (50.0, 1.433),
            (51.0, 1.447),
            (52.0, 1.461),
        ],
    ),
    (
        100.0,
        &[
            (0.0, 0.980),
            (45.0, 1.330),
            (48.0, 1.365),
            (50.0, 1.392),
            (51.0, 1.405),
            (52.0, 1.418),
        ],
    ),
];

/// (압력 kPa, 순수 물 비점 °C). 압력 오름차순.
pub(super) const VAPOR_PRESSURE: &[(f64, f64)] = &[
    (1.0, 6.7),
    (2.0, 17.2),
    (3.0, 23.8),
    (4.0, 28.7),
    (5.0, 32.5),
    (6.0, 35.3),
    (7.0, 38.7),
    (8.0, 41.2),
    (9.0, 43.4),
    (10.0, 45.5),
    (15.0, 53.6),
    (20.0, 59.7),
    (25.0, 64.5),
    (30.0, 68.7),
    (35.0, 71.8),
    (40.0, 75.4),
    (45.0, 78.3),
    (50.0, 80.9),
    (55.0, 83.2),
    (60.0, 85.5),
    (65.0, 87.5),
    (70.0, 89.4),
    (75.0, 91.3),
    (80.0, 93.0),
    (85.0, 94.6),
    (90.0, 96.2),
    (95.0, 97.7),
    (100.0, 98.1),
    (150.0, 110.8),
    (200.0, 119.6),
    (250.0, 126.8),
    (300.0, 132.9),
];

/// 운전 압력 허용 범위(kPa). 극저진공 영역만 다룬다.
pub(super) const SUPPORTED_PRESSURE_KPA: (f64, f64) = (8.0, 28.0);
