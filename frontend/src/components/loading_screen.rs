use yew::prelude::*;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <div class="loading-logo">
                <div class="loading-pulse"></div>
                <div class="loading-ring">
                    <div class="loading-core"></div>
                </div>
            </div>
            <h2 class="loading-title">{"BEBA AI"}</h2>
            <div class="loading-letters">
                { for "Loading".chars().enumerate().map(|(index, letter)| html! {
                    <span style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}>
                        {letter}
                    </span>
                }) }
            </div>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: var(--beba-purple);
                }
                .loading-logo {
                    position: relative;
                    width: 8rem;
                    height: 8rem;
                }
                .loading-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: var(--gradient-beba);
                    animation: loadingPulse 2s ease-in-out infinite;
                }
                .loading-ring {
                    position: absolute;
                    inset: 0.5rem;
                    border-radius: 50%;
                    background: var(--beba-purple);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: loadingSpin 3s linear infinite;
                }
                .loading-core {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: var(--gradient-beba);
                    opacity: 0.8;
                }
                .loading-title {
                    margin-top: 2rem;
                    color: #fff;
                    font-family: var(--font-display);
                }
                .loading-letters span {
                    color: var(--beba-cyan);
                    font-size: 0.875rem;
                    animation: loadingBlink 1.5s infinite;
                }
                @keyframes loadingPulse {
                    0%, 100% { transform: scale(1); opacity: 0.5; }
                    50% { transform: scale(1.2); opacity: 0.8; }
                }
                @keyframes loadingSpin {
                    to { transform: rotate(360deg); }
                }
                @keyframes loadingBlink {
                    0%, 100% { opacity: 0.5; }
                    50% { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
