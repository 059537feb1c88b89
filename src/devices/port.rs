//! EV3 port addresses

use core::fmt;

/// Physical port on the EV3 brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    In1,
    In2,
    In3,
    In4,
    OutA,
    OutB,
    OutC,
    OutD,
}

impl Port {
    pub const INPUTS: [Port; 4] = [Port::In1, Port::In2, Port::In3, Port::In4];
    pub const OUTPUTS: [Port; 4] = [Port::OutA, Port::OutB, Port::OutC, Port::OutD];

    /// ev3dev sysfs address of the port
    pub const fn address(self) -> &'static str {
        match self {
            Port::In1 => "ev3-ports:in1",
            Port::In2 => "ev3-ports:in2",
            Port::In3 => "ev3-ports:in3",
            Port::In4 => "ev3-ports:in4",
            Port::OutA => "ev3-ports:outA",
            Port::OutB => "ev3-ports:outB",
            Port::OutC => "ev3-ports:outC",
            Port::OutD => "ev3-ports:outD",
        }
    }

    /// Motor ports are outputs, sensor ports are inputs.
    pub const fn is_output(self) -> bool {
        matches!(self, Port::OutA | Port::OutB | Port::OutC | Port::OutD)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.address())
    }
}
