// Fallback strategies.
//
// Each strategy knows how to attempt one candidate against a target and
// which failures mean "try the next one". `Duck::resolve` drives the loop.
//
// 1. Attr     - attribute names: "prop", "some_property"
// 2. AttrCall - duck contexts: names, call probes, closures
// 3. Call     - argument sets for calling the target itself

pub mod attr;
pub use attr::AttrStrategy;

pub mod attr_call;
pub use attr_call::AttrCallStrategy;

pub mod call;
pub use call::CallStrategy;
