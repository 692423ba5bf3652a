//! Frozen GMDH classification models.
//!
//! One table per stage and per mode. Observed-mode tables take the condition
//! and a candidate treatment, ideal-mode tables take the condition only.
//! Factor indices are zero-based positions in the condition (`c`) or
//! treatment (`t`) vector.

use crate::gmdh::{c, t, Equation, Output, Term, AVOIDABLE};
use crate::individual::CRITERIA_COUNT;

/// Early postoperative complications x301..x309 from condition x101..x112 and treatment x201..x209.
pub static OPERATIONAL_OBSERVED: [Equation; CRITERIA_COUNT] = [
    Equation {
        intercept: -0.832705,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.00291197, factors: &[c(10, -1), t(0, 1)] },
            Term { coefficient: -0.00135807, factors: &[c(5, 1), t(7, 1)] },
            Term { coefficient: -0.00232767, factors: &[c(4, 1), c(8, 1)] },
            Term { coefficient: 17.0861, factors: &[c(0, -1), c(11, 1)] },
            Term { coefficient: 10.4146, factors: &[c(2, -1), c(8, -1)] },
            Term { coefficient: 0.000502042, factors: &[c(0, 1), t(1, 1)] },
            Term { coefficient: 0.358865, factors: &[t(4, -1), t(6, 1)] },
            Term { coefficient: -0.00771969, factors: &[c(8, -1), t(1, 1)] },
            Term { coefficient: -0.0530489, factors: &[t(1, 1), t(3, -1)] },
            Term { coefficient: 35.5495, factors: &[c(0, -1), t(3, -1)] },
        ],
    },
    Equation {
        intercept: 1.8959,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 4.62265e-05, factors: &[c(2, 1), c(3, 1)] },
            Term { coefficient: -0.0705953, factors: &[c(4, 1), t(4, -1)] },
            Term { coefficient: -0.0233172, factors: &[c(3, -1), c(5, 1)] },
            Term { coefficient: -41.7888, factors: &[t(0, -1), t(6, -1)] },
            Term { coefficient: 0.0905328, factors: &[c(6, -1), c(7, 1)] },
            Term { coefficient: -121.413, factors: &[c(2, -1), t(6, -1)] },
            Term { coefficient: -0.585375, factors: &[c(10, 1), t(8, -1)] },
            Term { coefficient: 0.620899, factors: &[c(4, -1), c(8, 1)] },
            Term { coefficient: -2.62234, factors: &[c(5, -1), c(8, -1)] },
            Term { coefficient: 0.12513, factors: &[c(6, 1), t(3, -1)] },
        ],
    },
    Equation {
        intercept: -0.0102022,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 716.757, factors: &[t(0, -1), t(2, -1)] },
            Term { coefficient: 0.00518668, factors: &[c(5, 1), t(8, 1)] },
            Term { coefficient: -0.994431, factors: &[c(2, -1), c(5, 1)] },
            Term { coefficient: -0.000324448, factors: &[c(2, 1), c(11, 1)] },
            Term { coefficient: -1.12948, factors: &[c(4, -1), c(7, 1)] },
            Term { coefficient: 0.247751, factors: &[c(9, -1), t(8, 1)] },
            Term { coefficient: -2.46223, factors: &[c(2, -1), c(8, -1)] },
            Term { coefficient: -0.00429694, factors: &[c(5, 1), c(6, -1)] },
            Term { coefficient: 73.8395, factors: &[c(2, -1), c(6, -1)] },
            Term { coefficient: 0.0123085, factors: &[c(7, 1), t(3, 1)] },
        ],
    },
    Equation {
        intercept: 1.44158,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.00673552, factors: &[c(1, 1), t(1, 1)] },
            Term { coefficient: -0.00959038, factors: &[c(4, 1), c(11, 1)] },
            Term { coefficient: 0.044888, factors: &[t(1, 1), t(6, -1)] },
            Term { coefficient: 0.518793, factors: &[t(5, 1), t(8, -1)] },
            Term { coefficient: -0.0113419, factors: &[c(3, 1), c(11, 1)] },
            Term { coefficient: 0.000239275, factors: &[c(0, 1), c(7, 1)] },
            Term { coefficient: -0.00032867, factors: &[c(6, 1), t(0, 1)] },
            Term { coefficient: -11.7529, factors: &[c(4, -1), t(1, -1)] },
            Term { coefficient: 0.0013597, factors: &[c(2, 1), c(10, -1)] },
            Term { coefficient: -0.000968004, factors: &[c(2, 1), t(5, -1)] },
        ],
    },
    Equation {
        intercept: -1.6615,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.0346257, factors: &[c(3, 1), c(9, 1)] },
            Term { coefficient: 3.10562, factors: &[c(4, -1), c(11, 1)] },
            Term { coefficient: -21.4803, factors: &[c(2, -1), t(7, 1)] },
            Term { coefficient: 0.00047157, factors: &[c(8, -1), t(0, 1)] },
            Term { coefficient: 0.00862588, factors: &[c(7, 1), t(1, 1)] },
            Term { coefficient: 10.1393, factors: &[c(9, 1), t(2, -1)] },
            Term { coefficient: -0.159258, factors: &[c(0, -1), c(5, 1)] },
            Term { coefficient: -0.0942774, factors: &[c(8, -1), c(11, -1)] },
            Term { coefficient: 0.00720075, factors: &[c(3, 1), t(2, 1)] },
            Term { coefficient: 0.557958, factors: &[c(9, 1), t(1, -1)] },
        ],
    },
    Equation {
        intercept: -0.975001,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.0475912, factors: &[c(7, 1), t(8, 1)] },
            Term { coefficient: 0.697149, factors: &[c(4, -1), c(11, 1)] },
            Term { coefficient: 0.46606, factors: &[c(10, 1), t(7, 1)] },
            Term { coefficient: -242.356, factors: &[c(11, -1), t(0, -1)] },
            Term { coefficient: 0.261032, factors: &[c(7, 1), c(11, -1)] },
            Term { coefficient: 58.4543, factors: &[t(0, -1), t(8, 1)] },
            Term { coefficient: 0.30269, factors: &[c(7, 1), t(7, -1)] },
            Term { coefficient: -0.183598, factors: &[c(7, 1), c(10, 1)] },
            Term { coefficient: 12.3259, factors: &[c(5, -1), c(11, -1)] },
            Term { coefficient: -13.7248, factors: &[c(5, -1), c(10, -1)] },
        ],
    },
    Equation {
        intercept: -4.40144,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -3.4971, factors: &[c(1, -1), c(9, -1)] },
            Term { coefficient: -0.0306613, factors: &[c(11, 1), t(1, 1)] },
            Term { coefficient: -43.0255, factors: &[c(2, -1), t(3, 1)] },
            Term { coefficient: 0.155946, factors: &[c(10, 1), t(4, 1)] },
            Term { coefficient: 0.0941545, factors: &[c(9, 1), t(7, 1)] },
            Term { coefficient: 0.386844, factors: &[t(2, 1), t(5, -1)] },
            Term { coefficient: 12.2186, factors: &[t(2, -1), t(5, 1)] },
            Term { coefficient: 0.00132263, factors: &[c(0, 1), t(3, 1)] },
            Term { coefficient: 6595.83, factors: &[c(0, -1), c(2, -1)] },
            Term { coefficient: 0.0178928, factors: &[t(1, 1), t(7, 1)] },
        ],
    },
    Equation {
        intercept: 0.756968,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -645.415, factors: &[c(2, -1), t(4, -1)] },
            Term { coefficient: 7.78827, factors: &[c(0, -1), c(8, 1)] },
            Term { coefficient: -0.000590993, factors: &[c(2, 1), t(5, 1)] },
            Term { coefficient: -0.0105553, factors: &[c(8, 1), t(3, 1)] },
            Term { coefficient: -0.507904, factors: &[c(0, 1), c(2, -1)] },
            Term { coefficient: 21.8255, factors: &[c(2, -1), t(2, 1)] },
            Term { coefficient: 19.0435, factors: &[t(2, -1), t(4, -1)] },
            Term { coefficient: -0.0813564, factors: &[c(8, 1), t(4, 1)] },
            Term { coefficient: 1.49701, factors: &[c(3, -1), c(8, 1)] },
            Term { coefficient: 0.000912961, factors: &[c(0, 1), t(7, 1)] },
        ],
    },
    Equation {
        intercept: 1.28185,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.0191846, factors: &[c(1, 1), t(5, 1)] },
            Term { coefficient: 0.0272657, factors: &[t(3, 1), t(6, 1)] },
            Term { coefficient: -0.00709976, factors: &[c(0, 1), t(6, -1)] },
            Term { coefficient: -60.0672, factors: &[c(0, -1), t(3, -1)] },
            Term { coefficient: -0.0216769, factors: &[c(3, -1), c(5, 1)] },
            Term { coefficient: 0.07052, factors: &[c(7, 1), t(4, 1)] },
            Term { coefficient: -0.00645342, factors: &[c(4, 1), c(7, 1)] },
            Term { coefficient: -0.023769, factors: &[c(7, 1), t(3, 1)] },
            Term { coefficient: 0.123772, factors: &[c(7, 1), t(6, -1)] },
            Term { coefficient: -0.24784, factors: &[c(3, 1), c(4, -1)] },
        ],
    },
];

/// Complications x303..x309 predicted from the condition alone; x301 and x302 are always avoidable.
pub static OPERATIONAL_IDEAL: [Equation; CRITERIA_COUNT] = [
    AVOIDABLE,
    AVOIDABLE,
    Equation {
        intercept: 0.369661,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.00310719, factors: &[c(5, 1), c(10, 1)] },
            Term { coefficient: -0.000751507, factors: &[c(5, 1), c(7, 1)] },
            Term { coefficient: -1.03015e-05, factors: &[c(2, 1), c(5, 1)] },
            Term { coefficient: 4.53861e-05, factors: &[c(2, 1), c(7, 1)] },
            Term { coefficient: -0.357763, factors: &[c(10, 1)] },
            Term { coefficient: 0.00105434, factors: &[c(5, 1), c(11, 1)] },
            Term { coefficient: -0.00670676, factors: &[c(1, 1), c(11, 1)] },
            Term { coefficient: 0.00417287, factors: &[c(1, 1), c(7, 1)] },
            Term { coefficient: 0.000583292, factors: &[c(2, 1)] },
            Term { coefficient: -8.76937e-05, factors: &[c(1, 1), c(5, 1)] },
        ],
    },
    Equation {
        intercept: 0.175478,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.154013, factors: &[c(9, 1), c(11, 1)] },
            Term { coefficient: 0.0055126, factors: &[c(0, 1), c(10, 1)] },
            Term { coefficient: 0.000703851, factors: &[c(2, 1), c(6, 1)] },
            Term { coefficient: -0.0270747, factors: &[c(6, 1), c(8, 1)] },
            Term { coefficient: -0.00028867, factors: &[c(2, 1), c(7, 1)] },
            Term { coefficient: 0.0515488, factors: &[c(1, 1), c(9, 1)] },
            Term { coefficient: -0.413692, factors: &[c(6, 1), c(11, 1)] },
            Term { coefficient: 0.0185017, factors: &[c(7, 1), c(11, 1)] },
            Term { coefficient: 0.00789789, factors: &[c(7, 1), c(8, 1)] },
            Term { coefficient: -0.00487274, factors: &[c(0, 1), c(9, 1)] },
            Term { coefficient: -0.0490524, factors: &[c(1, 1), c(10, 1)] },
            Term { coefficient: -0.000395743, factors: &[c(0, 1), c(7, 1)] },
            Term { coefficient: 0.000153086, factors: &[c(0, 1), c(6, 1)] },
            Term { coefficient: 0.920759, factors: &[c(6, 1)] },
            Term { coefficient: -0.0243143, factors: &[c(4, 1), c(6, 1)] },
            Term { coefficient: 0.0514067, factors: &[c(4, 1), c(11, 1)] },
            Term { coefficient: -0.0825905, factors: &[c(4, 1)] },
            Term { coefficient: 0.00620842, factors: &[c(4, 1), c(7, 1)] },
        ],
    },
    Equation {
        intercept: -0.227066,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.0734265, factors: &[c(4, 1), c(10, 1)] },
            Term { coefficient: -0.028469, factors: &[c(6, 1), c(7, 1)] },
            Term { coefficient: 0.000299704, factors: &[c(2, 1), c(6, 1)] },
            Term { coefficient: 0.000299719, factors: &[c(0, 1), c(3, 1)] },
            Term { coefficient: -0.0224514, factors: &[c(3, 1), c(7, 1)] },
            Term { coefficient: 0.358285, factors: &[c(10, 1), c(11, 1)] },
            Term { coefficient: 0.000163868, factors: &[c(3, 1), c(5, 1)] },
            Term { coefficient: -9.55294e-06, factors: &[c(2, 1), c(5, 1)] },
            Term { coefficient: 0.0002392, factors: &[c(2, 1), c(7, 1)] },
            Term { coefficient: -0.000231602, factors: &[c(4, 1), c(5, 1)] },
            Term { coefficient: 0.512628, factors: &[c(7, 1)] },
            Term { coefficient: -0.0751962, factors: &[c(7, 1), c(11, 1)] },
            Term { coefficient: 0.0754866, factors: &[c(4, 1), c(9, 1)] },
            Term { coefficient: -0.001482, factors: &[c(0, 1), c(6, 1)] },
            Term { coefficient: -0.0126606, factors: &[c(1, 1), c(7, 1)] },
            Term { coefficient: 0.000532562, factors: &[c(5, 1), c(7, 1)] },
            Term { coefficient: 0.00464377, factors: &[c(1, 1), c(3, 1)] },
            Term { coefficient: -0.0334515, factors: &[c(1, 1), c(9, 1)] },
            Term { coefficient: 0.00934543, factors: &[c(4, 1), c(7, 1)] },
            Term { coefficient: -0.0342288, factors: &[c(4, 1), c(11, 1)] },
            Term { coefficient: 0.000261614, factors: &[c(0, 1), c(1, 1)] },
            Term { coefficient: -0.00219381, factors: &[c(0, 1), c(9, 1)] },
            Term { coefficient: 0.109794, factors: &[c(6, 1), c(11, 1)] },
        ],
    },
    Equation {
        intercept: -0.0114987,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.00578912, factors: &[c(7, 1), c(8, 1)] },
            Term { coefficient: 1.1257, factors: &[c(3, -1), c(8, -1)] },
            Term { coefficient: -0.0419663, factors: &[c(8, -1), c(11, -1)] },
            Term { coefficient: -0.00358674, factors: &[c(5, 1), c(10, -1)] },
            Term { coefficient: -0.000515749, factors: &[c(5, 1), c(8, 1)] },
            Term { coefficient: 0.0632775, factors: &[c(8, 1), c(9, 1)] },
            Term { coefficient: -0.0298963, factors: &[c(8, 1), c(10, 1)] },
            Term { coefficient: 0.0109361, factors: &[c(7, 1), c(8, -1)] },
            Term { coefficient: -0.0432296, factors: &[c(8, -1), c(11, 1)] },
            Term { coefficient: 0.00138459, factors: &[c(1, 1), c(8, 1)] },
            Term { coefficient: -5.55096, factors: &[c(2, -1), c(8, -1)] },
            Term { coefficient: 0.88429, factors: &[c(5, -1), c(7, 1)] },
            Term { coefficient: 0.261843, factors: &[c(9, 1), c(10, -1)] },
            Term { coefficient: 0.000715337, factors: &[c(5, 1), c(7, 1)] },
            Term { coefficient: -0.0391553, factors: &[c(7, 1), c(9, 1)] },
            Term { coefficient: 2.59644, factors: &[c(2, -1), c(7, 1)] },
            Term { coefficient: 0.000557014, factors: &[c(5, 1), c(6, -1)] },
            Term { coefficient: 0.341142, factors: &[c(6, 1), c(9, -1)] },
            Term { coefficient: -0.00959482, factors: &[c(4, 1), c(9, -1)] },
            Term { coefficient: -0.0715939, factors: &[c(6, 1), c(10, -1)] },
            Term { coefficient: -0.78666, factors: &[c(5, -1), c(8, 1)] },
            Term { coefficient: -656.336, factors: &[c(2, -1), c(5, -1)] },
            Term { coefficient: -0.00633399, factors: &[c(5, 1), c(9, -1)] },
            Term { coefficient: 0.0286779, factors: &[c(3, -1), c(5, 1)] },
            Term { coefficient: -0.886387, factors: &[c(3, -1), c(6, 1)] },
            Term { coefficient: 0.0132561, factors: &[c(6, 1), c(8, 1)] },
            Term { coefficient: -0.00200309, factors: &[c(4, 1), c(8, 1)] },
            Term { coefficient: -0.0264503, factors: &[c(6, 1), c(9, 1)] },
        ],
    },
    Equation {
        intercept: 2.6937,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.00637564, factors: &[c(0, 1), c(9, 1)] },
            Term { coefficient: -0.00117356, factors: &[c(0, 1), c(8, 1)] },
            Term { coefficient: -0.00267333, factors: &[c(8, 2)] },
            Term { coefficient: 0.00413604, factors: &[c(4, 1), c(10, 1)] },
            Term { coefficient: -0.00073236, factors: &[c(2, 1), c(11, 1)] },
            Term { coefficient: 0.204242, factors: &[c(8, 1)] },
            Term { coefficient: 1.62601e-05, factors: &[c(2, 1), c(5, 1)] },
            Term { coefficient: -1.08259e-05, factors: &[c(5, 2)] },
            Term { coefficient: 0.153545, factors: &[c(1, 1), c(11, 1)] },
            Term { coefficient: -0.000396763, factors: &[c(0, 1), c(1, 1)] },
            Term { coefficient: -0.104191, factors: &[c(8, 1), c(11, 1)] },
            Term { coefficient: 0.00284761, factors: &[c(2, 1)] },
            Term { coefficient: -0.000144981, factors: &[c(1, 1), c(2, 1)] },
            Term { coefficient: 0.00251191, factors: &[c(5, 1), c(6, 1)] },
            Term { coefficient: -0.000936957, factors: &[c(2, 1), c(9, 1)] },
            Term { coefficient: -0.000577864, factors: &[c(0, 1), c(4, 1)] },
            Term { coefficient: 0.00385265, factors: &[c(3, 1), c(4, 1)] },
            Term { coefficient: -0.83391, factors: &[c(11, 2)] },
            Term { coefficient: -0.307295, factors: &[c(1, 1)] },
            Term { coefficient: 0.00483699, factors: &[c(1, 2)] },
            Term { coefficient: -0.112072, factors: &[c(6, 1)] },
            Term { coefficient: -0.0459923, factors: &[c(3, 1), c(9, 1)] },
            Term { coefficient: 0.000413922, factors: &[c(0, 1), c(3, 1)] },
            Term { coefficient: 0.216481, factors: &[c(9, 1), c(11, 1)] },
            Term { coefficient: 0.0068067, factors: &[c(3, 1), c(8, 1)] },
            Term { coefficient: -0.00353053, factors: &[c(1, 1), c(7, 1)] },
            Term { coefficient: -0.00962964, factors: &[c(5, 1)] },
            Term { coefficient: 0.000303744, factors: &[c(4, 1), c(5, 1)] },
            Term { coefficient: -0.0391921, factors: &[c(6, 2)] },
        ],
    },
    Equation {
        intercept: -1.14363,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.00138057, factors: &[c(1, 1), c(8, 1)] },
            Term { coefficient: 1.10351e-05, factors: &[c(2, 1), c(5, 1)] },
            Term { coefficient: 0.122882, factors: &[c(4, 1), c(10, 1)] },
            Term { coefficient: -0.0012283, factors: &[c(5, 1), c(7, 1)] },
            Term { coefficient: -0.0121911, factors: &[c(7, 1), c(8, 1)] },
            Term { coefficient: 0.44975, factors: &[c(9, 2)] },
            Term { coefficient: 0.00167406, factors: &[c(0, 1), c(6, 1)] },
            Term { coefficient: 0.00572702, factors: &[c(5, 1), c(10, 1)] },
            Term { coefficient: 0.00782358, factors: &[c(2, 1)] },
            Term { coefficient: -5.48141e-06, factors: &[c(2, 2)] },
            Term { coefficient: -0.000982276, factors: &[c(2, 1), c(6, 1)] },
            Term { coefficient: -2.41892e-05, factors: &[c(0, 2)] },
            Term { coefficient: 0.000759317, factors: &[c(2, 1), c(7, 1)] },
            Term { coefficient: 0.00210718, factors: &[c(0, 1), c(9, 1)] },
            Term { coefficient: -0.01283, factors: &[c(4, 1), c(7, 1)] },
            Term { coefficient: 0.0327821, factors: &[c(6, 1), c(7, 1)] },
            Term { coefficient: -0.00028816, factors: &[c(2, 1), c(4, 1)] },
            Term { coefficient: -0.862231, factors: &[c(9, 1), c(10, 1)] },
            Term { coefficient: 0.00717402, factors: &[c(7, 2)] },
            Term { coefficient: 0.000164123, factors: &[c(2, 1), c(8, 1)] },
            Term { coefficient: -0.134656, factors: &[c(7, 1), c(10, 1)] },
            Term { coefficient: -0.0522137, factors: &[c(8, 1), c(11, 1)] },
            Term { coefficient: 0.141487, factors: &[c(8, 1)] },
            Term { coefficient: 0.0154947, factors: &[c(3, 1), c(7, 1)] },
            Term { coefficient: -0.00406125, factors: &[c(3, 1), c(4, 1)] },
            Term { coefficient: -0.0119813, factors: &[c(5, 1)] },
            Term { coefficient: 1.94922e-05, factors: &[c(0, 1), c(5, 1)] },
            Term { coefficient: -0.00031123, factors: &[c(5, 1), c(8, 1)] },
            Term { coefficient: -0.000104463, factors: &[c(0, 1), c(4, 1)] },
        ],
    },
    Equation {
        intercept: 1.67402,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 64.7561, factors: &[c(2, -1), c(10, 1)] },
            Term { coefficient: -0.00257077, factors: &[c(7, 1), c(8, 1)] },
            Term { coefficient: 0.000177662, factors: &[c(2, 1), c(8, -1)] },
            Term { coefficient: -892.92, factors: &[c(0, -1), c(1, -1)] },
            Term { coefficient: -0.0215984, factors: &[c(7, 1), c(8, -1)] },
            Term { coefficient: 0.00529672, factors: &[c(4, 1), c(8, 1)] },
            Term { coefficient: -0.0818487, factors: &[c(6, 1), c(8, 1)] },
            Term { coefficient: 8.77323, factors: &[c(5, -1), c(6, -1)] },
            Term { coefficient: -1.63549, factors: &[c(2, -1), c(5, 1)] },
            Term { coefficient: -1.69885e-05, factors: &[c(0, 1), c(2, 1)] },
            Term { coefficient: -4.57522, factors: &[c(4, -1), c(9, -1)] },
            Term { coefficient: 2.06638, factors: &[c(5, -1), c(7, 1)] },
            Term { coefficient: 0.00764918, factors: &[c(3, 1), c(8, -1)] },
            Term { coefficient: -1.33627, factors: &[c(6, -1), c(11, -1)] },
            Term { coefficient: 0.163089, factors: &[c(6, -1), c(10, -1)] },
            Term { coefficient: -0.250843, factors: &[c(8, 1), c(11, -1)] },
            Term { coefficient: 2.04587, factors: &[c(1, -1), c(8, 1)] },
            Term { coefficient: 0.144078, factors: &[c(9, 1), c(10, -1)] },
            Term { coefficient: 0.0875985, factors: &[c(1, 1), c(11, -1)] },
            Term { coefficient: 4.40152, factors: &[c(1, -1), c(11, 1)] },
            Term { coefficient: -0.000362291, factors: &[c(0, 1), c(4, 1)] },
            Term { coefficient: -267.832, factors: &[c(1, -1), c(5, -1)] },
            Term { coefficient: 3.30086e-05, factors: &[c(0, 1), c(5, 1)] },
            Term { coefficient: -0.0331608, factors: &[c(1, 1), c(9, 1)] },
            Term { coefficient: 0.687005, factors: &[c(6, -1), c(9, 1)] },
            Term { coefficient: -0.523747, factors: &[c(3, 1), c(4, -1)] },
            Term { coefficient: -8.04198, factors: &[c(3, -1), c(6, -1)] },
            Term { coefficient: 0.000894778, factors: &[c(0, 1), c(6, 1)] },
            Term { coefficient: 26.1572, factors: &[c(0, -1), c(6, -1)] },
        ],
    },
];

/// Late postoperative complications x501..x509 from post-conditions x301..x309 and medication x401..x409.
pub static CONSERVATIVE_OBSERVED: [Equation; CRITERIA_COUNT] = [
    Equation {
        intercept: 0.203898,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.910959, factors: &[c(0, -1), t(4, -1)] },
            Term { coefficient: 0.427516, factors: &[t(3, -1), t(4, 1)] },
            Term { coefficient: -3.25314, factors: &[t(2, 1), t(5, -1)] },
            Term { coefficient: 4.30283, factors: &[c(0, 1), t(2, 1)] },
            Term { coefficient: -0.0507695, factors: &[t(3, 1), t(4, -1)] },
            Term { coefficient: -1.25164, factors: &[c(2, 1), t(2, 1)] },
            Term { coefficient: -1.13018, factors: &[c(3, -1), t(4, -1)] },
            Term { coefficient: 0.013292, factors: &[t(0, 1), t(8, -1)] },
            Term { coefficient: -0.382442, factors: &[c(7, 1), c(8, -1)] },
            Term { coefficient: -2.07729, factors: &[c(5, -1), t(3, -1)] },
            Term { coefficient: 1.05208, factors: &[t(0, -1), t(8, 1)] },
            Term { coefficient: -19.254, factors: &[t(1, -1), t(6, -1)] },
            Term { coefficient: -0.0224005, factors: &[t(3, 1), t(8, 1)] },
            Term { coefficient: -10.406, factors: &[c(4, -1), t(0, -1)] },
            Term { coefficient: 0.101907, factors: &[c(4, -1), t(3, 1)] },
            Term { coefficient: 3.49662, factors: &[t(0, -1), t(4, -1)] },
            Term { coefficient: 1.15775, factors: &[c(1, -1), t(4, -1)] },
            Term { coefficient: 0.17399, factors: &[c(1, 1), c(2, 1)] },
            Term { coefficient: -7.90677, factors: &[t(0, -1), t(3, -1)] },
            Term { coefficient: -0.122005, factors: &[c(0, 1), t(6, 1)] },
            Term { coefficient: 5.83819, factors: &[c(7, 1), t(1, -1)] },
            Term { coefficient: -0.0369662, factors: &[c(0, -1), t(3, 1)] },
            Term { coefficient: 2.73641, factors: &[t(0, -1), t(6, -1)] },
        ],
    },
    Equation {
        intercept: -0.471431,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 1.09482, factors: &[c(4, -1), t(5, -1)] },
            Term { coefficient: -3.06197, factors: &[t(2, 1), t(7, 1)] },
            Term { coefficient: 2.72805, factors: &[c(3, 1), t(2, 1)] },
            Term { coefficient: 2.92486, factors: &[c(1, -1), t(0, -1)] },
            Term { coefficient: 1.72336, factors: &[c(3, -1), c(6, -1)] },
            Term { coefficient: -5.41859, factors: &[t(1, -1), t(7, -1)] },
            Term { coefficient: -0.0445508, factors: &[t(1, 1), t(3, -1)] },
            Term { coefficient: -0.298849, factors: &[t(4, 1), t(6, -1)] },
            Term { coefficient: -1.36086, factors: &[c(7, -1), t(4, -1)] },
            Term { coefficient: 1.09577, factors: &[c(0, 1), t(6, -1)] },
            Term { coefficient: -0.783258, factors: &[c(0, 1), t(4, -1)] },
            Term { coefficient: -0.493502, factors: &[t(1, -1), t(3, 1)] },
            Term { coefficient: 0.0744676, factors: &[t(0, 1), t(3, -1)] },
            Term { coefficient: 0.265279, factors: &[t(4, -1), t(5, 1)] },
            Term { coefficient: 0.501585, factors: &[t(5, -1), t(6, 1)] },
            Term { coefficient: -0.36206, factors: &[c(2, -1), t(8, 1)] },
            Term { coefficient: 0.802625, factors: &[t(4, -1), t(6, -1)] },
            Term { coefficient: -1.03788, factors: &[c(3, -1), t(5, -1)] },
        ],
    },
    Equation {
        intercept: 1.95339,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.32464, factors: &[t(7, -1), t(8, -1)] },
            Term { coefficient: 2.31705, factors: &[c(7, -1), t(3, -1)] },
            Term { coefficient: -0.276162, factors: &[t(6, 1), t(7, 1)] },
            Term { coefficient: -2.4394, factors: &[t(6, -1), t(7, -1)] },
            Term { coefficient: -0.111947, factors: &[c(3, 1), t(5, 1)] },
            Term { coefficient: 0.0305552, factors: &[t(3, 1), t(6, -1)] },
            Term { coefficient: 1.27569, factors: &[t(4, -1), t(7, -1)] },
            Term { coefficient: -0.0607239, factors: &[t(0, 1), t(4, -1)] },
            Term { coefficient: -1.0994, factors: &[t(0, -1), t(8, 1)] },
            Term { coefficient: 0.0271928, factors: &[c(2, -1), t(0, 1)] },
        ],
    },
    Equation {
        intercept: 1.06655,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 3.59357, factors: &[t(2, 1), t(8, -1)] },
            Term { coefficient: -1.19368, factors: &[t(5, -1), t(6, -1)] },
            Term { coefficient: -0.00880017, factors: &[t(3, 1), t(4, 1)] },
            Term { coefficient: 2.06499, factors: &[c(7, -1), t(6, -1)] },
            Term { coefficient: -0.150814, factors: &[t(0, 1), t(2, 1)] },
            Term { coefficient: 0.011523, factors: &[t(1, 1), t(6, -1)] },
            Term { coefficient: 0.6211, factors: &[c(0, -1), t(6, 1)] },
            Term { coefficient: 0.0241819, factors: &[t(0, 1), t(4, -1)] },
            Term { coefficient: -0.0143991, factors: &[t(0, 1), t(3, -1)] },
            Term { coefficient: 0.136269, factors: &[c(0, 1), t(4, 1)] },
            Term { coefficient: -0.00884287, factors: &[t(4, 1), t(6, 1)] },
            Term { coefficient: -0.211492, factors: &[t(6, 1), t(7, 1)] },
            Term { coefficient: 0.00221758, factors: &[t(3, 1), t(6, 1)] },
            Term { coefficient: -1.33289, factors: &[c(2, -1), c(6, -1)] },
            Term { coefficient: -1.01545, factors: &[c(0, -1), c(7, -1)] },
            Term { coefficient: -0.206286, factors: &[t(4, 1), t(7, -1)] },
            Term { coefficient: -0.303684, factors: &[c(4, -1), c(8, 1)] },
            Term { coefficient: -1.84102, factors: &[t(1, -1), t(8, 1)] },
            Term { coefficient: 0.514069, factors: &[c(0, 1), t(0, -1)] },
        ],
    },
    Equation {
        intercept: 0.091119,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 1.15482, factors: &[c(7, -1), t(5, -1)] },
            Term { coefficient: -0.234552, factors: &[c(3, 1), c(8, 1)] },
            Term { coefficient: -0.468262, factors: &[c(2, 1), c(4, -1)] },
            Term { coefficient: -0.00120581, factors: &[t(0, 1), t(1, 1)] },
            Term { coefficient: 2.20372, factors: &[t(6, -1), t(7, -1)] },
            Term { coefficient: 0.203365, factors: &[t(6, 1), t(7, 1)] },
            Term { coefficient: -0.224786, factors: &[c(0, -1), t(7, -1)] },
            Term { coefficient: 1.75401, factors: &[t(2, 1), t(6, -1)] },
            Term { coefficient: 0.0515831, factors: &[t(1, 1), t(3, -1)] },
            Term { coefficient: 0.0186275, factors: &[t(0, 1), t(7, -1)] },
            Term { coefficient: -3.10445, factors: &[c(5, -1), t(2, 1)] },
            Term { coefficient: 0.0266439, factors: &[t(3, 1), t(7, 1)] },
            Term { coefficient: -0.143367, factors: &[c(1, 1), t(6, 1)] },
            Term { coefficient: -0.655295, factors: &[c(1, -1), t(6, -1)] },
            Term { coefficient: 3.61478, factors: &[t(2, 1), t(8, -1)] },
            Term { coefficient: -4.82115, factors: &[t(2, 1), t(7, -1)] },
            Term { coefficient: -0.222182, factors: &[t(0, -1), t(3, 1)] },
            Term { coefficient: 1.68566, factors: &[t(0, -1), t(4, -1)] },
            Term { coefficient: 0.154106, factors: &[t(2, 1), t(3, 1)] },
            Term { coefficient: 1.94052, factors: &[t(3, -1), t(5, 1)] },
            Term { coefficient: 0.0123596, factors: &[t(0, 1), t(6, 1)] },
            Term { coefficient: -1.7251, factors: &[t(3, -1), t(6, -1)] },
            Term { coefficient: -0.303317, factors: &[c(3, -1), t(5, 1)] },
            Term { coefficient: -0.768984, factors: &[c(5, 1), t(3, -1)] },
            Term { coefficient: 6.71103, factors: &[c(2, -1), t(1, -1)] },
        ],
    },
    Equation {
        intercept: 1.22334,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.64041, factors: &[t(2, 1), t(5, 1)] },
            Term { coefficient: 1.92831, factors: &[t(1, -1), t(3, 1)] },
            Term { coefficient: 0.186573, factors: &[c(4, 1), c(6, 1)] },
            Term { coefficient: -0.204982, factors: &[t(2, 1), t(3, 1)] },
            Term { coefficient: -12.1129, factors: &[t(0, -1), t(7, -1)] },
            Term { coefficient: 7.87555, factors: &[c(3, -1), t(0, -1)] },
            Term { coefficient: -2.69499, factors: &[c(8, -1), t(7, 1)] },
            Term { coefficient: 0.874263, factors: &[c(1, 1), c(3, -1)] },
            Term { coefficient: 0.113644, factors: &[t(0, -1), t(1, 1)] },
            Term { coefficient: 58.3697, factors: &[c(2, -1), t(1, -1)] },
            Term { coefficient: -8.91198, factors: &[c(2, -1), t(0, -1)] },
            Term { coefficient: -57.1008, factors: &[c(8, 1), t(1, -1)] },
            Term { coefficient: 12.9686, factors: &[c(0, -1), t(1, -1)] },
            Term { coefficient: 11.804, factors: &[t(1, -1), t(8, 1)] },
            Term { coefficient: 1.0522, factors: &[t(7, 1), t(8, -1)] },
            Term { coefficient: -0.0536574, factors: &[c(7, -1), t(3, 1)] },
            Term { coefficient: 2.98424, factors: &[c(4, -1), t(2, 1)] },
            Term { coefficient: -1.11811, factors: &[c(1, 1), t(8, -1)] },
            Term { coefficient: 25.7593, factors: &[c(3, 1), t(1, -1)] },
            Term { coefficient: 0.086348, factors: &[t(4, -1), t(6, 1)] },
            Term { coefficient: 5.31789, factors: &[t(0, -1), t(8, -1)] },
            Term { coefficient: -0.00743753, factors: &[t(0, 1), t(8, 1)] },
        ],
    },
    Equation {
        intercept: 2.70189,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.387945, factors: &[c(0, 2)] },
            Term { coefficient: -0.0851309, factors: &[c(4, 1), c(7, 1)] },
            Term { coefficient: -0.232534, factors: &[c(5, 1), c(6, 1)] },
            Term { coefficient: 0.0657112, factors: &[c(1, 1), t(8, 1)] },
            Term { coefficient: 0.208682, factors: &[c(2, 1), t(7, 1)] },
            Term { coefficient: -2.58931, factors: &[t(2, 1), t(6, 1)] },
            Term { coefficient: 2.53922, factors: &[t(2, 1), t(4, 1)] },
            Term { coefficient: -0.205441, factors: &[t(1, 1), t(2, 1)] },
            Term { coefficient: -0.624969, factors: &[c(0, 1), t(7, 1)] },
            Term { coefficient: -0.00361108, factors: &[t(0, 1), t(3, 1)] },
            Term { coefficient: 0.014996, factors: &[c(0, 1), t(0, 1)] },
            Term { coefficient: 0.000855651, factors: &[t(1, 1), t(3, 1)] },
            Term { coefficient: -0.0180873, factors: &[c(1, 1), t(0, 1)] },
            Term { coefficient: 3.3802, factors: &[t(2, 1), t(8, 1)] },
            Term { coefficient: -4.60527, factors: &[c(1, 1), t(2, 1)] },
            Term { coefficient: 8.3029, factors: &[c(3, 1), t(2, 1)] },
            Term { coefficient: -0.192993, factors: &[c(2, 1), c(3, 1)] },
            Term { coefficient: 0.22353, factors: &[t(6, 1), t(7, 1)] },
            Term { coefficient: -0.159675, factors: &[t(6, 1), t(8, 1)] },
            Term { coefficient: -0.118495, factors: &[c(1, 1), c(8, 1)] },
            Term { coefficient: -7.86307, factors: &[c(0, 1), t(2, 1)] },
            Term { coefficient: -0.0519393, factors: &[t(5, 1), t(6, 1)] },
            Term { coefficient: -10.6638, factors: &[t(2, 2)] },
            Term { coefficient: 3.47469, factors: &[t(2, 1), t(7, 1)] },
            Term { coefficient: -1.3094, factors: &[t(2, 1), t(5, 1)] },
            Term { coefficient: 0.000791461, factors: &[t(0, 2)] },
        ],
    },
    Equation {
        intercept: 0.491547,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: 0.293381, factors: &[c(1, 1), t(7, 1)] },
            Term { coefficient: -0.00138491, factors: &[t(1, 1), t(6, 1)] },
            Term { coefficient: -0.10257, factors: &[t(2, 1), t(3, 1)] },
            Term { coefficient: 0.102928, factors: &[t(4, 1), t(5, 1)] },
            Term { coefficient: 0.150368, factors: &[c(0, 1), c(3, 1)] },
            Term { coefficient: -0.0278252, factors: &[t(0, 1), t(7, 1)] },
            Term { coefficient: -0.00818883, factors: &[t(3, 1), t(4, 1)] },
            Term { coefficient: 0.0115062, factors: &[t(3, 1), t(8, 1)] },
            Term { coefficient: -0.45356, factors: &[c(7, 1), t(5, 1)] },
            Term { coefficient: 0.439602, factors: &[c(3, 1), t(5, 1)] },
            Term { coefficient: -0.153749, factors: &[c(3, 1), c(5, 1)] },
            Term { coefficient: 0.040654, factors: &[c(4, 1), t(0, 1)] },
            Term { coefficient: -0.0169291, factors: &[t(0, 1), t(6, 1)] },
            Term { coefficient: -0.000416154, factors: &[t(0, 1), t(1, 1)] },
            Term { coefficient: -0.142557, factors: &[c(3, 1), c(4, 1)] },
        ],
    },
    Equation {
        intercept: 2.24957,
        output: Output::Indicator,
        terms: &[
            Term { coefficient: -0.184216, factors: &[c(6, 1), c(7, 1)] },
            Term { coefficient: 0.149113, factors: &[t(0, -1), t(3, 1)] },
            Term { coefficient: -0.0107084, factors: &[c(1, 1), t(3, 1)] },
            Term { coefficient: -8.19724, factors: &[t(1, -1), t(6, -1)] },
            Term { coefficient: -6.10407, factors: &[t(2, 1), t(4, -1)] },
            Term { coefficient: 3.4668, factors: &[t(2, 1), t(8, 1)] },
            Term { coefficient: -0.35094, factors: &[t(7, -1), t(8, 1)] },
            Term { coefficient: 0.0394856, factors: &[c(0, 1), t(0, 1)] },
            Term { coefficient: -0.0306855, factors: &[c(5, 1), t(0, 1)] },
            Term { coefficient: -0.230414, factors: &[c(1, 1), c(2, -1)] },
            Term { coefficient: -0.0215096, factors: &[t(4, 1), t(6, 1)] },
            Term { coefficient: -0.109036, factors: &[c(0, 1), t(7, 1)] },
            Term { coefficient: -2.45236, factors: &[c(5, -1), t(2, 1)] },
            Term { coefficient: 0.715238, factors: &[c(3, -1), c(5, -1)] },
        ],
    },
];

/// Only x509 depends on the condition alone. Its model predicts the class label directly.
pub static CONSERVATIVE_IDEAL: [Equation; CRITERIA_COUNT] = [
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    AVOIDABLE,
    Equation {
        intercept: 1.70408,
        output: Output::Class,
        terms: &[
            Term { coefficient: -0.238892, factors: &[c(1, 1), c(6, 1)] },
            Term { coefficient: 0.170947, factors: &[c(0, 2)] },
        ],
    },
];
