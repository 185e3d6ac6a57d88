//! USB CDC-ACM device presenting the board's CDC-only identity.
//!
//! Initialises the Embassy USB stack on the nRF52840 USBD peripheral with
//! the descriptor's VID, CDC-only PID and strings, then prints the
//! `INFO_UF2.TXT` contents once per port open (DTR raised).

use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_usb::class::cdc_acm::{CdcAcmClass, Sender, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;
use uf2_boards::config::{BOOTLOADER_VERSION, USB_CDC_PACKET_SIZE, USB_MAX_POWER_MA};
use uf2_boards::uf2_info::{write_info_uf2, PortOpen};
use uf2_boards::{BoardDescriptor, UsbMode};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static CDC_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Build result containing the USB device runner and the serial class.
pub struct UsbSerial {
    pub device: UsbDevice<'static, UsbDriver>,
    pub class: CdcAcmClass<'static, UsbDriver>,
}

/// Initialise the USB stack for `board` in CDC-only mode.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD, board: &'static BoardDescriptor<'static>) -> UsbSerial {
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mode = UsbMode::CdcOnly;
    let mut usb_config = Config::new(board.usb.vid, board.usb.pid(mode));
    usb_config.manufacturer = Some(board.ble.manufacturer);
    usb_config.product = Some(board.uf2.product_name);
    usb_config.max_power = USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    // Required for CDC-ACM on Windows (IAD).
    usb_config.device_class = 0xEF;
    usb_config.device_sub_class = 0x02;
    usb_config.device_protocol = 0x01;
    usb_config.composite_with_iads = true;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), USB_CDC_PACKET_SIZE);
    let device = builder.build();

    info!(
        "USB {:04x}:{:04x} ({}) initialised",
        board.usb.vid,
        board.usb.pid(mode),
        mode
    );

    UsbSerial { device, class }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
#[embassy_executor::task]
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Print the board's UF2 info once each time a host opens the serial port.
///
/// "Open" is the host raising DTR; the text is not repeated until DTR has
/// dropped and been raised again. Each pass blocks on a control-line change.
#[embassy_executor::task]
pub async fn info_task(
    class: CdcAcmClass<'static, UsbDriver>,
    board: &'static BoardDescriptor<'static>,
) -> ! {
    let mut text: heapless::String<256> = heapless::String::new();
    if write_info_uf2(board, BOOTLOADER_VERSION, &mut text).is_err() {
        warn!("INFO_UF2.TXT truncated");
    }

    let (mut send, _recv, ctl) = class.split_with_control();
    let mut port = PortOpen::default();
    loop {
        send.wait_connection().await;
        let was_open = port.is_open();
        if port.update(send.dtr()) {
            info!("Serial port opened");
            if let Err(e) = write_serial(&mut send, text.as_bytes()).await {
                warn!("Serial write failed: {}", e);
            }
        } else if was_open && !port.is_open() {
            info!("Serial port closed");
        }
        ctl.control_changed().await;
    }
}

async fn write_serial(
    send: &mut Sender<'static, UsbDriver>,
    data: &[u8],
) -> Result<(), EndpointError> {
    let max_packet_size = usize::from(send.max_packet_size());
    for chunk in data.chunks(max_packet_size) {
        send.write_packet(chunk).await?;
    }
    if data.len() % max_packet_size == 0 {
        send.write_packet(&[]).await?;
    }
    Ok(())
}
