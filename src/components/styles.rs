// Classes that inline styles can't express: hover states, media queries, keyframes.

pub const STYLESHEET: &str = r#"
.restart-button {
  font-family: 'Nunito', sans-serif;
  font-size: 1.2rem;
  padding: 12px 25px;
  cursor: pointer;
  border: none;
  border-radius: 50px;
  background: linear-gradient(45deg, #2196F3, #673AB7);
  color: white;
  font-weight: bold;
  box-shadow: 0 4px 15px rgba(0,0,0,0.2);
  transition: all 0.3s ease;
}
.restart-button:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px rgba(0,0,0,0.25);
}

.game-area-layout { display: flex; flex-direction: column; gap: 20px; }
@media (min-width: 768px) {
  .game-area-layout { flex-direction: row; align-items: center; padding: 40px; gap: 40px; }
  .monster-container-layout { flex: 0 0 250px; }
  .interaction-area-layout {
    flex: 1;
    min-height: 250px;
    display: flex;
    flex-direction: column;
    justify-content: center;
  }
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
  20%, 40%, 60%, 80% { transform: translateX(5px); }
}
.shake-animation { animation: shake 0.5s ease-in-out; }

.jar-button {
  background: transparent;
  border: none;
  cursor: pointer;
  padding: 0;
  position: relative;
  width: 60px;
  height: 80px;
  transition: transform 0.2s ease;
}
.jar-button:hover:not(:disabled) { transform: scale(1.1) translateY(-5px); }
.jar-button:disabled { cursor: default; opacity: 0.5; }
.jar-tooltip {
  position: absolute;
  bottom: 100%;
  left: 50%;
  transform: translateX(-50%) translateY(10px);
  background-color: #37474f;
  color: white;
  padding: 5px 10px;
  border-radius: 5px;
  font-size: 0.9rem;
  font-family: 'Nunito', sans-serif;
  font-weight: bold;
  white-space: nowrap;
  opacity: 0;
  visibility: hidden;
  transition: opacity 0.2s ease, transform 0.2s ease;
  z-index: 10;
  margin-bottom: 8px;
  box-shadow: 0 2px 5px rgba(0,0,0,0.2);
}
.jar-tooltip::after {
  content: '';
  position: absolute;
  top: 100%;
  left: 50%;
  margin-left: -5px;
  border-width: 5px;
  border-style: solid;
  border-color: #37474f transparent transparent transparent;
}
.jar-button:hover:not(:disabled) .jar-tooltip,
.jar-button:focus-visible .jar-tooltip {
  opacity: 1;
  visibility: visible;
  transform: translateX(-50%) translateY(0);
}
.jar-lid {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translateX(-50%);
  width: 40px;
  height: 10px;
  background-color: #6d4c41;
  border-radius: 5px 5px 0 0;
  z-index: 2;
  border: 1px solid rgba(0,0,0,0.1);
}
.jar-body {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 70px;
  background-color: var(--jar-color);
  border: 5px solid #8d6e63;
  box-sizing: border-box;
  border-radius: 0 0 25px 25px;
  overflow: hidden;
  transition: background-color 0.3s;
}
.jar-body::after {
  content: '';
  position: absolute;
  inset: 0;
  background-image: linear-gradient(to top, rgba(0,0,0,0.15), transparent 50%);
  border-radius: 0 0 20px 20px;
}

@keyframes glow-joy {
  0%, 100% { filter: drop-shadow(0 0 5px #fdd835); transform: scale(1); }
  50% { filter: drop-shadow(0 0 20px #fdd835); transform: scale(1.05); }
}
.monster-alegria { animation: glow-joy 2s infinite ease-in-out; }

@keyframes wave-sadness {
  0%, 100% { transform: translateY(0) skewY(0deg); }
  50% { transform: translateY(5px) skewY(2deg); }
}
.monster-tristeza { animation: wave-sadness 3s infinite ease-in-out; }

@keyframes shake-anger {
  0% { transform: translate(1px, 1px) rotate(0deg); }
  20% { transform: translate(-3px, 0px) rotate(1deg); }
  40% { transform: translate(1px, -1px) rotate(1deg); }
  60% { transform: translate(-3px, 1px) rotate(0deg); }
  80% { transform: translate(-1px, -1px) rotate(1deg); }
  100% { transform: translate(1px, -2px) rotate(-1deg); }
}
.monster-raiva { animation: shake-anger 0.5s infinite; }

@keyframes tremble-fear {
  0%, 100% { transform: translateX(0); }
  25%, 75% { transform: translateX(-2px); }
  50% { transform: translateX(2px); }
}
.monster-medo { animation: tremble-fear 0.2s infinite; }

@keyframes breathe-calm {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.03); }
}
.monster-calma { animation: breathe-calm 4s infinite ease-in-out; }

@keyframes heartbeat-love {
  0%, 20%, 40%, 100% { transform: scale(1); }
  10%, 30% { transform: scale(1.08); }
}
.monster-amor { animation: heartbeat-love 2.5s infinite ease-out; }
"#;
