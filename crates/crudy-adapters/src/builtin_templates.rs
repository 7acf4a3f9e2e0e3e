//! Built-in templates for the generated Go service.
//!
//! Every template starts with the same header block: the copyright line as a
//! `//` comment, followed by the license header when the context carries
//! one. Templates are rendered with [`MiniJinjaRenderer`], so optional keys
//! are guarded with `is defined`.
//!
//! [`MiniJinjaRenderer`]: crate::renderer::MiniJinjaRenderer

use crudy_core::domain::catalog;

/// `main.go`
pub const MAIN: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package main

import (
	"log"

	"{{ modelPackage }}"
	"{{ routerPackage }}"
)

func main() {
	config, err := InitConfig()
	if err != nil {
		log.Fatal("Could not load config")
	}

	db, err := InitDB(config)
	if err != nil {
		log.Fatal("Could not connect to the db")
	}
	defer db.Close()

	env := &model.Env{}

	log.Println("Starting {{ appName }} on {{ listenAddr }}")
	r := router.InitRouter(config, env)
	r.Run("{{ listenAddr }}")
}
"#;

/// `db.go`
pub const DB: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package main

import (
	"fmt"
	"log"
	"time"

	"{{ modelPackage }}"
	"github.com/jinzhu/gorm"
	_ "github.com/jinzhu/gorm/dialects/postgres"
)

// InitDB starts the DB
func InitDB(config *model.Config) (*gorm.DB, error) {
	log.Println("Connecting to database")
	cnx := fmt.Sprintf("host=%s user=%s password=%s dbname=%s port=%d sslmode=disable",
		config.DBHost, config.DBUser, config.DBPassword, config.DBName, config.DBPort)

	db, err := gorm.Open("postgres", cnx)
	if err != nil {
		return nil, err
	}

	db.LogMode(true)

	// Ping until the connection comes alive (containers start slowly).
	var dbError error
	maxAttempts := 5
	for attempts := 1; attempts <= maxAttempts; attempts++ {
		dbError = db.DB().Ping()
		if dbError == nil {
			break
		}
		log.Println(dbError)
		time.Sleep(time.Duration(attempts) * time.Second)
	}

	if dbError != nil {
		return nil, dbError
	}

	db.AutoMigrate()
	return db, nil
}
"#;

/// `config.go`
pub const CONFIG: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package main

import (
	"os"
	"path/filepath"

	"{{ modelPackage }}"
	"github.com/spf13/viper"
)

// InitConfig reads configuration files
func InitConfig() (*model.Config, error) {
	viper.SetEnvPrefix("{{ envPrefix }}")
	if os.Getenv("Enviroment") == "dev" {
		viper.SetConfigName(".conf")
		viper.SetConfigType("toml")
		viper.AddConfigPath(filepath.Dir(""))
		viper.ReadInConfig()
	} else {
		viper.AutomaticEnv()
	}

	// defaults
	viper.SetDefault("{{ envPrefix | upper }}_SECRET", "{{ defaultSecret }}")
	viper.SetDefault("{{ envPrefix | upper }}_DBHOST", "{{ dbHost }}")
	viper.SetDefault("{{ envPrefix | upper }}_DBUSER", "{{ dbUser }}")
	viper.SetDefault("{{ envPrefix | upper }}_DBPASSWORD", "{{ dbPassword }}")
	viper.SetDefault("{{ envPrefix | upper }}_DBNAME", "{{ dbName }}")
	viper.SetDefault("{{ envPrefix | upper }}_DBPORT", {{ dbPort }})

	return NewConfig(
		viper.GetString("{{ envPrefix | upper }}_SECRET"),
		viper.GetString("{{ envPrefix | upper }}_DBHOST"),
		viper.GetString("{{ envPrefix | upper }}_DBUSER"),
		viper.GetString("{{ envPrefix | upper }}_DBPASSWORD"),
		viper.GetString("{{ envPrefix | upper }}_DBNAME"),
		viper.GetInt("{{ envPrefix | upper }}_DBPORT"),
	), nil
}

// NewConfig returns a new configuration object
func NewConfig(secret, dbHost, dbUser, dbPassword, dbName string, dbPort int) *model.Config {
	return &model.Config{
		Secret:     secret,
		DBHost:     dbHost,
		DBUser:     dbUser,
		DBPassword: dbPassword,
		DBName:     dbName,
		DBPort:     dbPort,
	}
}
"#;

/// `router/router.go`
pub const ROUTER: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package router

import (
	"net/http"

	"{{ modelPackage }}"
	"github.com/gin-gonic/gin"
)

// InitRouter initializes the router and sets the basic routes.
func InitRouter(config *model.Config, env *model.Env) *gin.Engine {
	router := gin.Default()
	router.Use(CORSMiddleware())

	// Sample User CRUD
	// user := router.Group("/user")
	// {
	// 	user.POST("/", UserCreateHandler(config, env.User))
	// 	user.GET("/", UserListHandler(config, env.User))
	// 	user.GET("/:id", UserFindHandler(config, env.User))
	// 	user.PATCH("/:id", UserUpdateHandler(config, env.User))
	// 	user.DELETE("/:id", NotImplementedHandler())
	// }

	return router
}

// NotImplementedHandler is returned when the handler is not done
func NotImplementedHandler() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.JSON(http.StatusNotFound, gin.H{"status": "Fail", "message": "Handler not implemented"})
	}
}

// CORSMiddleware sets the CORS headers
func CORSMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Writer.Header().Set("Access-Control-Allow-Origin", "*")
		c.Writer.Header().Set("Access-Control-Allow-Methods", "POST, GET, OPTIONS, PUT, DELETE, UPDATE")
		c.Writer.Header().Set("Access-Control-Allow-Headers", "Origin, Content-Type, Content-Length, Accept-Encoding")
		c.Writer.Header().Set("Access-Control-Expose-Headers", "Content-Length")
		c.Writer.Header().Set("Access-Control-Allow-Credentials", "true")

		if c.Request.Method == "OPTIONS" {
			c.AbortWithStatus(http.StatusOK)
		} else {
			c.Next()
		}
	}
}
"#;

/// `model/config.go`
pub const MODEL_CONFIG: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package model

// Config struct, must be injected where needed.
type Config struct {
	Secret     string
	DBHost     string
	DBUser     string
	DBPassword string
	DBName     string
	DBPort     int
}
"#;

/// `model/env.go`
pub const MODEL_ENV: &str = r#"{{ copyrightLine | comment }}
{% if licenseHeader is defined %}
//
{{ licenseHeader | comment }}
{% endif %}

package model

// Env struct, used to help wiring up dependencies sent to the router
type Env struct {
	// SampleStore InterfaceName
}
"#;

/// Every built-in template as `(name, source)`, in catalog order.
pub fn all() -> [(&'static str, &'static str); 6] {
    [
        (catalog::MAIN, MAIN),
        (catalog::DB, DB),
        (catalog::CONFIG, CONFIG),
        (catalog::ROUTER, ROUTER),
        (catalog::MODEL_CONFIG, MODEL_CONFIG),
        (catalog::MODEL_ENV, MODEL_ENV),
    ]
}
