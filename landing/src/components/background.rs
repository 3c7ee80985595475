//! Decorative animated line field behind the page.

use leptos::prelude::*;

/// Curves drawn across a 1440x900 canvas.
const LINE_PATHS: &[&str] = &[
    "M720 450C720 450 742.459 440.315 755.249 425.626C768.039 410.937 778.88 418.179 789.478 392.94C800.076 367.701 817.06 351.895 841.039 353.501C865.019 355.107 880.104 327.348 897.071 318.389C914.038 309.43 948.282 298.094 969.306 284.563C990.33 271.033 1022.09 257.061 1049.32 248.652C1076.55 240.242 1110.47 221.062 1130.34 206.398C1150.21 191.734 1180.46 181.541 1209.39 169.086C1238.33 156.631 1265.37 132.465 1290.79 119.873",
    "M720 450C720 450 741.044 435.759 753.062 410.636C765.079 385.514 770.541 386.148 782.73 370.489C794.918 354.83 799.378 353.188 811.338 332.06C823.298 310.932 822.257 305.264 838.987 288.131C855.718 270.998 863.73 258.128 869.278 239.937C874.826 221.746 884.561 216.427 896.648 198.147C908.734 179.866 928.403 178.224 935.183 150.924C941.962 123.624 956.564 114.315 968.072 92.4432C979.58 70.5716 989.354 53.4427 1000.1 32.4316",
    "M720 450C720 450 703.766 471.461 685.647 481.473C667.528 491.486 660.193 502.437 637.633 517.229C615.073 532.022 600.858 547.004 581.534 565.473C562.21 583.942 546.281 591.658 523.548 608.457C500.815 625.257 475.868 628.963 461.095 646.574C446.322 664.186 415.618 679.508 399.064 697.104C382.511 714.701 352.854 723.264 330.918 741.218C308.983 759.173 284.158 772.093 261.062 790.074",
    "M720 450C720 450 696.565 437.468 677.392 424.858C658.219 412.249 638.689 414.282 620.165 398.745C601.641 383.207 574.865 379.793 556.498 366.135C538.131 352.477 510.558 339.632 491.458 326.958C472.358 314.283 451.634 302.094 432.168 288.447C412.703 274.8 380.593 270.084 363.198 254.627C345.803 239.171 319.279 226.874 300.001 212.793",
    "M720 450C720 450 734.643 470.893 744.058 494.208C753.474 517.523 771.229 524.693 781.146 547.538C791.063 570.384 801.849 578.456 813.548 600.617C825.246 622.778 838.052 634.337 846.593 657.057C855.134 679.777 874.211 688.395 886.164 711.158C898.117 733.921 904.916 742.869 918.538 765.347C932.16 787.824 944.624 803.408 955.003 825.108",
    "M720 450C720 450 698.413 463.069 680.193 478.939C661.974 494.809 648.227 503.337 634.169 526.085C620.111 548.834 605.264 556.099 592.451 578.049C579.638 599.999 561.233 610.618 549.054 633.547C536.874 656.476 520.394 667.226 507.584 689.651C494.774 712.076 482.198 726.893 471.318 748.935",
];

/// Stroke colors cycled across the lines.
const LINE_COLORS: &[&str] = &["#46A5CA", "#8C2F2F", "#4FAE4D", "#D6590C", "#811010", "#247AFB"];

/// Wraps its children above an animated SVG line field. The SVG ignores
/// pointer events so it never steals hover from the content.
#[component]
pub fn BackgroundLines(children: Children) -> impl IntoView {
    view! {
        <div class="background-lines">
            <svg
                class="background-lines-svg"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 1440 900"
                fill="none"
                preserveAspectRatio="xMidYMid slice"
                aria-hidden="true"
            >
                {LINE_PATHS
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(i, d)| {
                        let color = LINE_COLORS[i % LINE_COLORS.len()];
                        let style = format!("animation-delay: {:.1}s;", i as f32 * 0.7);
                        view! {
                            <path
                                class="background-line"
                                d=d
                                stroke=color
                                stroke-width="2.3"
                                stroke-linecap="round"
                                style=style
                            ></path>
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="background-lines-content">{children()}</div>
        </div>
    }
}
