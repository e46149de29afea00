// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal: build
// a training set from a dialogue file.
//
// Rules for this layer:
//   - No tokenising, stemming, or vector math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and configuration

// The vectorization workflow and its configuration
pub mod build_use_case;
