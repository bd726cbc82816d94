pub mod capacitor;
pub mod current_source;
pub mod inductor;
pub mod resistor;
pub mod voltage_source;

use crate::netlist::ComponentKind;

/// Any parsed component card, before it's interned into a [`crate::netlist::Netlist`].
#[derive(Debug, Clone)]
pub enum Element {
    VoltageSource(voltage_source::VoltageSource),
    CurrentSource(current_source::CurrentSource),
    Resistor(resistor::Resistor),
    Capacitor(capacitor::Capacitor),
    Inductor(inductor::Inductor),
}

impl Element {
    pub fn identifier(&self) -> &str {
        match self {
            Element::VoltageSource(e) => e.identifier(),
            Element::CurrentSource(e) => e.identifier(),
            Element::Resistor(e) => e.identifier(),
            Element::Capacitor(e) => e.identifier(),
            Element::Inductor(e) => e.identifier(),
        }
    }

    /// `(node_a, node_b)`, the two terminal names this card connects.
    pub fn nodes(&self) -> (&str, &str) {
        match self {
            Element::VoltageSource(e) => (&e.node_a, &e.node_b),
            Element::CurrentSource(e) => (&e.node_a, &e.node_b),
            Element::Resistor(e) => (&e.node_a, &e.node_b),
            Element::Capacitor(e) => (&e.node_a, &e.node_b),
            Element::Inductor(e) => (&e.node_a, &e.node_b),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Element::VoltageSource(e) => e.value,
            Element::CurrentSource(e) => e.value,
            Element::Resistor(e) => e.value,
            Element::Capacitor(e) => e.value,
            Element::Inductor(e) => e.value,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Element::VoltageSource(_) => ComponentKind::Voltage,
            Element::CurrentSource(_) => ComponentKind::Current,
            Element::Resistor(_) => ComponentKind::Resistor,
            Element::Capacitor(_) => ComponentKind::Capacitor,
            Element::Inductor(_) => ComponentKind::Inductor,
        }
    }
}

impl From<voltage_source::VoltageSource> for Element {
    fn from(item: voltage_source::VoltageSource) -> Self {
        Element::VoltageSource(item)
    }
}
impl From<current_source::CurrentSource> for Element {
    fn from(item: current_source::CurrentSource) -> Self {
        Element::CurrentSource(item)
    }
}
impl From<resistor::Resistor> for Element {
    fn from(item: resistor::Resistor) -> Self {
        Element::Resistor(item)
    }
}
impl From<capacitor::Capacitor> for Element {
    fn from(item: capacitor::Capacitor) -> Self {
        Element::Capacitor(item)
    }
}
impl From<inductor::Inductor> for Element {
    fn from(item: inductor::Inductor) -> Self {
        Element::Inductor(item)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
